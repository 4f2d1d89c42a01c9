//! Sample books for seeding an empty shelf

use super::NewBook;

const SAMPLES: &[(&str, &str)] = &[
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("To Kill a Mockingbird", "Harper Lee"),
    ("1984", "George Orwell"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Hobbit", "J.R.R. Tolkien"),
    ("Moby Dick", "Herman Melville"),
    ("Brave New World", "Aldous Huxley"),
    ("The Catcher in the Rye", "J.D. Salinger"),
    ("The Alchemist", "Paulo Coelho"),
    ("War and Peace", "Leo Tolstoy"),
    ("The Road", "Cormac McCarthy"),
    ("Don Quixote", "Miguel de Cervantes"),
    ("Jane Eyre", "Charlotte Brontë"),
    ("Wuthering Heights", "Emily Brontë"),
    ("Les Misérables", "Victor Hugo"),
    ("Crime and Punishment", "Fyodor Dostoevsky"),
];

/// Classic titles used to populate a fresh shelf
pub fn sample_books() -> Vec<NewBook> {
    SAMPLES
        .iter()
        .map(|(title, author)| NewBook::new(*title, *author))
        .collect()
}
