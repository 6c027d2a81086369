use crate::controller::Exhaust;
use application::transfer::{BookDto, BookRequestDto};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub struct CsvFile {
    filename: &'static str,
    content: String,
}

impl CsvFile {
    fn new(filename: &'static str, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|cell| escape(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
        for row in rows {
            lines.push(
                row.iter()
                    .map(|cell| escape(cell))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        Self {
            filename,
            content: lines.join("\n"),
        }
    }
}

fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

impl IntoResponse for CsvFile {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [
                (
                    header::CONTENT_TYPE,
                    "text/csv; charset=utf-8".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.filename),
                ),
            ],
            self.content,
        )
            .into_response()
    }
}

pub struct BookCsvPresenter;

impl Exhaust<Vec<BookDto>> for BookCsvPresenter {
    type To = CsvFile;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let rows = input
            .into_iter()
            .map(|book| {
                vec![
                    book.title,
                    book.author,
                    book.department,
                    book.publication_year,
                    book.isbn,
                    book.copies.to_string(),
                    book.available_copies.to_string(),
                ]
            })
            .collect();
        CsvFile::new(
            "Library_Books.csv",
            &[
                "Title",
                "Author",
                "Department",
                "Publication Year",
                "ISBN",
                "Total Copies",
                "Available Copies",
            ],
            rows,
        )
    }
}

pub struct RequestCsvPresenter;

impl Exhaust<Vec<BookRequestDto>> for RequestCsvPresenter {
    type To = CsvFile;
    fn emit(&self, input: Vec<BookRequestDto>) -> Self::To {
        let rows = input
            .into_iter()
            .map(|request| {
                vec![
                    request.student_name,
                    request.student_id,
                    request.book_title,
                    request.request_date.to_string(),
                    request.status.to_string(),
                ]
            })
            .collect();
        CsvFile::new(
            "Book_Requests.csv",
            &[
                "Student Name",
                "Student ID",
                "Book Title",
                "Request Date",
                "Status",
            ],
            rows,
        )
    }
}

#[cfg(test)]
mod test {
    use super::CsvFile;

    #[test]
    fn quotes_cells_that_need_it() {
        let file = CsvFile::new(
            "Library_Books.csv",
            &["Title", "Author"],
            vec![
                vec!["Data Structures, Using C++".to_string(), "D.S. Malik".to_string()],
                vec!["The \"C\" Book".to_string(), "Mike Banahan".to_string()],
            ],
        );

        assert_eq!(
            file.content,
            "Title,Author\n\"Data Structures, Using C++\",D.S. Malik\n\"The \"\"C\"\" Book\",Mike Banahan"
        );
    }
}
