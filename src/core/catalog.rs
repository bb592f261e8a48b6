//! # Hierarchy Catalog
//!
//! The fixed testament → book → chapter table, plus an approximate verse
//! count per chapter.
//!
//! ```text
//! TESTAMENTS
//! ├── Old Testament   (39 books, Genesis … Malachi)
//! └── New Testament   (27 books, Matthew … Revelation)
//! ```
//!
//! Verse counts are not stored per chapter. `approx_verse_count` answers from a
//! short list of known chapters and otherwise falls back to the book's typical
//! chapter length. The answer is only approximate, but it is deterministic,
//! and the navigator treats it as the upper bound for verse traversal.

/// A top-level grouping of books.
#[derive(Debug, PartialEq, Eq)]
pub struct Testament {
    pub name: &'static str,
    /// Short blurb shown next to the testament in the selection list.
    pub summary: &'static str,
    pub books: &'static [Book],
}

/// A single book and its chapter count.
#[derive(Debug, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub chapters: u16,
    /// Typical verses per chapter, used when a chapter has no exact entry.
    typical_verses: u16,
}

const fn book(name: &'static str, chapters: u16, typical_verses: u16) -> Book {
    Book {
        name,
        chapters,
        typical_verses,
    }
}

/// Fallback for book names that are not in the catalog.
const DEFAULT_VERSE_COUNT: u16 = 30;

static OLD_TESTAMENT_BOOKS: [Book; 39] = [
    book("Genesis", 50, 31),
    book("Exodus", 40, 30),
    book("Leviticus", 27, 32),
    book("Numbers", 36, 36),
    book("Deuteronomy", 34, 28),
    book("Joshua", 24, 27),
    book("Judges", 21, 29),
    book("Ruth", 4, 21),
    book("1 Samuel", 31, 26),
    book("2 Samuel", 24, 29),
    book("1 Kings", 22, 37),
    book("2 Kings", 25, 29),
    book("1 Chronicles", 29, 32),
    book("2 Chronicles", 36, 23),
    book("Ezra", 10, 28),
    book("Nehemiah", 13, 31),
    book("Esther", 10, 17),
    book("Job", 42, 25),
    book("Psalms", 150, 16),
    book("Proverbs", 31, 30),
    book("Ecclesiastes", 12, 19),
    book("Song of Solomon", 8, 15),
    book("Isaiah", 66, 20),
    book("Jeremiah", 52, 26),
    book("Lamentations", 5, 31),
    book("Ezekiel", 48, 27),
    book("Daniel", 12, 30),
    book("Hosea", 14, 14),
    book("Joel", 3, 24),
    book("Amos", 9, 16),
    book("Obadiah", 1, 21),
    book("Jonah", 4, 12),
    book("Micah", 7, 15),
    book("Nahum", 3, 16),
    book("Habakkuk", 3, 19),
    book("Zephaniah", 3, 18),
    book("Haggai", 2, 19),
    book("Zechariah", 14, 15),
    book("Malachi", 4, 14),
];

static NEW_TESTAMENT_BOOKS: [Book; 27] = [
    book("Matthew", 28, 38),
    book("Mark", 16, 42),
    book("Luke", 24, 48),
    book("John", 21, 42),
    book("Acts", 28, 36),
    book("Romans", 16, 27),
    book("1 Corinthians", 16, 27),
    book("2 Corinthians", 13, 20),
    book("Galatians", 6, 25),
    book("Ephesians", 6, 26),
    book("Philippians", 4, 26),
    book("Colossians", 4, 24),
    book("1 Thessalonians", 5, 18),
    book("2 Thessalonians", 3, 16),
    book("1 Timothy", 6, 19),
    book("2 Timothy", 4, 21),
    book("Titus", 3, 15),
    book("Philemon", 1, 25),
    book("Hebrews", 13, 23),
    book("James", 5, 22),
    book("1 Peter", 5, 21),
    book("2 Peter", 3, 20),
    book("1 John", 5, 21),
    book("2 John", 1, 13),
    book("3 John", 1, 14),
    book("Jude", 1, 25),
    book("Revelation", 22, 18),
];

static TESTAMENTS: [Testament; 2] = [
    Testament {
        name: "Old Testament",
        summary: "39 books from Genesis to Malachi",
        books: &OLD_TESTAMENT_BOOKS,
    },
    Testament {
        name: "New Testament",
        summary: "27 books from Matthew to Revelation",
        books: &NEW_TESTAMENT_BOOKS,
    },
];

/// Chapters whose verse count is known exactly: (book, chapter, verses).
static KNOWN_CHAPTERS: &[(&str, u16, u16)] = &[
    ("Genesis", 1, 31),
    ("Genesis", 2, 25),
    ("Genesis", 3, 24),
    ("Exodus", 20, 26),
    ("Psalms", 1, 6),
    ("Psalms", 23, 6),
    ("Psalms", 117, 2),
    ("Psalms", 119, 176),
    ("Proverbs", 31, 31),
    ("Isaiah", 53, 12),
    ("Matthew", 5, 48),
    ("Matthew", 6, 34),
    ("Luke", 1, 80),
    ("Luke", 2, 52),
    ("John", 1, 51),
    ("John", 3, 36),
    ("John", 11, 57),
    ("Romans", 8, 39),
    ("1 Corinthians", 13, 13),
    ("Hebrews", 11, 40),
    ("Revelation", 1, 20),
    ("Revelation", 21, 27),
    ("Revelation", 22, 21),
];

/// Both testaments, Old first.
pub fn testaments() -> &'static [Testament] {
    &TESTAMENTS
}

/// Look up a book by its display name across both testaments.
pub fn find_book(name: &str) -> Option<&'static Book> {
    TESTAMENTS
        .iter()
        .flat_map(|t| t.books.iter())
        .find(|b| b.name == name)
}

/// Number of chapters in `book`. Always at least 1.
pub fn chapter_count(book: &Book) -> u16 {
    book.chapters.max(1)
}

/// Approximate verse count for a chapter of the named book. Always at least 1.
pub fn approx_verse_count(book_name: &str, chapter: u16) -> u16 {
    let known = KNOWN_CHAPTERS
        .iter()
        .find(|(name, ch, _)| *name == book_name && *ch == chapter)
        .map(|&(_, _, verses)| verses);

    known
        .or_else(|| find_book(book_name).map(|b| b.typical_verses))
        .unwrap_or(DEFAULT_VERSE_COUNT)
        .max(1)
}
