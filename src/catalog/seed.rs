use crate::document::Document;

const SAMPLES: [(u32, &str, &str); 8] = [
    (0, "Edwin Dusty", "A Title"),
    (1, "Jarrod Otis", "A Slightly Large Title"),
    (2, "Harland Raymond", "A Non-Unique Title"),
    (3, "Eldred Wilson", "A Non-Unique Title"),
    (4, "Andrew Bishop", "A Non-Unique Title"),
    (5, "Andrew Bishop", "A SHOUTY TITLE"),
    (6, "Harland Raymond", "A Title: The Sequel"),
    (7, "Jarrod Otis", "A Title: The Prequel"),
];

/// The sample documents a fresh catalog can be seeded with (ids 0 through 7).
pub fn sample_documents() -> Vec<Document> {
    SAMPLES
        .iter()
        .map(|(id, author, title)| Document::new(*id, *author, *title, "Document Text"))
        .collect()
}
