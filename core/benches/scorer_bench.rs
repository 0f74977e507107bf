use criterion::{criterion_group, criterion_main, Criterion};
use genre_core::persist::parse_keyword_rows;
use genre_core::{build_table, Book, GenreScorer};

const KEYWORDS: &str = "Genre, Keyword, Points
fantasy, magic, 5
fantasy, dragon, 7
fantasy, wizard, 6
history, war, 4
action, war, 6
action, battle, 5
romance, love, 2
romance, heart, 8
mystery, detective, 9
horror, ghost, 8
";

fn bench_score(c: &mut Criterion) {
    let table = build_table(&parse_keyword_rows(KEYWORDS).unwrap()).unwrap();
    let scorer = GenreScorer::new(table).unwrap();
    let description = "A young wizard learns magic while a war rages; a detective follows a ghost \
        through a battle, and love finds the heart of a dragon. "
        .repeat(20);
    let books: Vec<Book> = (0..500).map(|i| Book::new(format!("Book {i}"), description.clone())).collect();

    c.bench_function("score_book", |b| b.iter(|| scorer.score_book(&description).unwrap()));
    c.bench_function("score_collection_500", |b| b.iter(|| scorer.score_collection(&books).unwrap()));
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
