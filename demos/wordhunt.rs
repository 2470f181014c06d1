use anyhow::Result;
use std::env;
use std::time::Instant;
use wordhunt_solver::Board;

const MIN_LENGTH: usize = 3;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let board = match args.get(1) {
        Some(wordfile) => Board::new().with_lexicon_from_file(wordfile)?,
        None => Board::new().with_lexicon_from_words(&["peace", "cap", "lane", "bent", "toy"]),
    };
    println!("{}\n", board);
    let t0 = Instant::now();
    let words = board.find_all_words(MIN_LENGTH)?;
    let dt = t0.elapsed();
    println!("Found {} words in {:?}", words.len(), dt);
    for word in &words {
        let path = board.find_path(word)?;
        let points = board.score_words(&[word], MIN_LENGTH)?;
        println!("{:3} {:12} {:?}", points, word, path);
    }
    println!("Total score: {}", board.score_words(&words, MIN_LENGTH)?);
    Ok(())
}
