//! Deterministic display values derived from the collection
//!
//! None of these are stored. They are pure functions of the books so that a
//! shelf looks the same every time it is drawn.

use crate::types::Book;
use serde::Serialize;
use std::num::NonZeroU32;

/// Books per shelf on the home screen
pub const BOOKS_PER_SHELF: usize = 9;

/// Cells per row of the reading-goal grid
pub const GOAL_ROW_LEN: usize = 9;

/// Largest reading goal the grid is drawn for
pub const MAX_GOAL: usize = 1000;

/// Shelves with more books than this get one slanted spine
const SLANT_MIN_BOOKS: usize = 6;

/// Sum of the UTF-16 code units of `s`
fn char_code_sum(s: &str) -> u64 {
    s.encode_utf16().map(u64::from).sum()
}

/// Star rating in `1..=5` derived from a book identifier
pub fn rating(id: &str) -> u8 {
    (char_code_sum(id) % 5) as u8 + 1
}

/// Whether the spine at `index` on a shelf leans against its neighbour
pub fn is_leaning(index: usize) -> bool {
    index % 5 == 3
}

/// Index of the one slanted spine on a shelf, if the shelf is full enough
pub fn slanted_index(shelf: &[Book]) -> Option<usize> {
    if shelf.len() <= SLANT_MIN_BOOKS {
        return None;
    }
    let seed: u64 = shelf.iter().map(|book| char_code_sum(&book.id)).sum();
    Some((seed % shelf.len() as u64) as usize)
}

/// Relative spine thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpineWidth {
    Thin,
    Regular,
    Thick,
}

impl SpineWidth {
    pub fn for_pages(pages: Option<NonZeroU32>) -> Self {
        match pages.map(NonZeroU32::get) {
            Some(n) if n >= 500 => Self::Thick,
            Some(n) if n >= 200 => Self::Regular,
            _ => Self::Thin,
        }
    }
}

/// Display attributes of one book on a shelf
#[derive(Debug, Clone, Serialize)]
pub struct Spine<'a> {
    pub book: &'a Book,
    pub leaning: bool,
    pub slanted: bool,
    pub width: SpineWidth,
    pub rating: u8,
}

/// Split the collection, in order, into shelves of at most `per_shelf` books
pub fn shelves(books: &[Book], per_shelf: usize) -> Vec<&[Book]> {
    books.chunks(per_shelf.max(1)).collect()
}

/// Display attributes for every book on one shelf
pub fn spines(shelf: &[Book]) -> Vec<Spine<'_>> {
    let slanted = slanted_index(shelf);
    shelf
        .iter()
        .enumerate()
        .map(|(index, book)| Spine {
            book,
            leaning: is_leaning(index),
            slanted: slanted == Some(index),
            width: SpineWidth::for_pages(book.pages),
            rating: rating(&book.id),
        })
        .collect()
}

/// Reading-goal grid: rows of up to [`GOAL_ROW_LEN`] cells, the first
/// `completed` cells (row-major) filled. `total` is capped at [`MAX_GOAL`].
pub fn goal_grid(completed: usize, total: usize) -> Vec<Vec<bool>> {
    let total = total.min(MAX_GOAL);
    (0..total)
        .step_by(GOAL_ROW_LEN)
        .map(|start| {
            (start..(start + GOAL_ROW_LEN).min(total))
                .map(|cell| cell < completed)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_id(id: &str) -> Book {
        let mut book = Book::new("t", "a", "#8D6E63");
        book.id = id.to_string();
        book
    }

    #[test]
    fn test_rating_is_deterministic() {
        // 'a' = 97, 97 % 5 = 2
        assert_eq!(rating("a"), 3);
        // "10" = 49 + 48 = 97
        assert_eq!(rating("10"), 3);
        assert_eq!(rating(""), 1);
        for id in ["1700000000000", "b1c2", "é"] {
            let r = rating(id);
            assert!((1..=5).contains(&r));
            assert_eq!(r, rating(id));
        }
    }

    #[test]
    fn test_leaning_positions() {
        let leaning: Vec<usize> = (0..12).filter(|i| is_leaning(*i)).collect();
        assert_eq!(leaning, vec![3, 8]);
    }

    #[test]
    fn test_slanted_index() {
        let small: Vec<Book> = (0..6).map(|i| book_with_id(&i.to_string())).collect();
        assert_eq!(slanted_index(&small), None);

        // ids "0".."6" sum to 48 + ... + 54 = 357, 357 % 7 = 0
        let full: Vec<Book> = (0..7).map(|i| book_with_id(&i.to_string())).collect();
        assert_eq!(slanted_index(&full), Some(0));
        assert_eq!(slanted_index(&full), slanted_index(&full.clone()));
    }

    #[test]
    fn test_spine_width() {
        assert_eq!(SpineWidth::for_pages(None), SpineWidth::Thin);
        assert_eq!(SpineWidth::for_pages(NonZeroU32::new(199)), SpineWidth::Thin);
        assert_eq!(SpineWidth::for_pages(NonZeroU32::new(200)), SpineWidth::Regular);
        assert_eq!(SpineWidth::for_pages(NonZeroU32::new(499)), SpineWidth::Regular);
        assert_eq!(SpineWidth::for_pages(NonZeroU32::new(1225)), SpineWidth::Thick);
    }

    #[test]
    fn test_shelves_and_spines() {
        let books: Vec<Book> = (0..20).map(|i| book_with_id(&format!("id{}", i))).collect();
        let rows = shelves(&books, BOOKS_PER_SHELF);
        assert_eq!(rows.iter().map(|s| s.len()).collect::<Vec<_>>(), vec![9, 9, 2]);
        assert_eq!(rows[1][0].id, "id9");

        let first = spines(rows[0]);
        assert_eq!(first.iter().filter(|s| s.slanted).count(), 1);
        assert!(first[3].leaning);
        assert!(first[8].leaning);
        assert!(!first[0].leaning);

        let last = spines(rows[2]);
        assert!(last.iter().all(|s| !s.slanted));

        assert!(shelves(&[], BOOKS_PER_SHELF).is_empty());
    }

    #[test]
    fn test_goal_grid() {
        let grid = goal_grid(9, 12);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![true; 9]);
        assert_eq!(grid[1], vec![false; 3]);

        let grid = goal_grid(4, 5);
        assert_eq!(grid, vec![vec![true, true, true, true, false]]);

        assert!(goal_grid(3, 0).is_empty());
    }

    #[test]
    fn test_goal_grid_is_capped() {
        let grid = goal_grid(1, usize::MAX);
        assert_eq!(grid.iter().map(Vec::len).sum::<usize>(), MAX_GOAL);
        assert!(grid.iter().all(|row| row.len() <= GOAL_ROW_LEN));
        assert!(grid[0][0]);
        assert!(!grid[0][1]);

        let exact = goal_grid(MAX_GOAL, MAX_GOAL);
        assert!(exact.iter().flatten().all(|&done| done));
    }
}
