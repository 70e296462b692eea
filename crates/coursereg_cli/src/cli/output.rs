//! Output formatting utilities

use coursereg_core::Course;

const HEADERS: [&str; 5] = ["ID", "Code", "Name", "Credits", "Instructor"];

/// Format courses as an aligned table with a header row.
pub fn format_course_table(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses found".to_string();
    }

    let rows: Vec<[String; 5]> = courses
        .iter()
        .map(|course| {
            [
                course.id.to_string(),
                course.code.clone(),
                course.name.clone(),
                course.credits.to_string(),
                course.instructor.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = format_row(HEADERS.iter().copied(), &widths);
    for row in &rows {
        output.push_str(&format_row(row.iter().map(String::as_str), &widths));
    }
    output
}

/// Format courses as a pretty-printed JSON array.
pub fn format_course_json(courses: &[Course]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(courses)
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
