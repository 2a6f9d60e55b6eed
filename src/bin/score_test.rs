// Minimal test harness for the pronunciation scorer
// Run with: cargo run --bin score_test
use tutor_core::score_pronunciation;

fn main() {
    let cases = [
        ("vanakkam", "vanakkam"),
        ("vanakkam", "banakkam"),
        ("nandri", "nanri"),
        ("eppadi irukkireergal", "epadi irukirgal"),
        ("kaalai vanakkam", "kalai vanakam"),
        ("நன்றி", "நன்றி"),
    ];
    for (expected, heard) in cases.iter() {
        println!(
            "{} ~ {} => {}",
            expected,
            heard,
            score_pronunciation(expected, heard)
        );
    }
}
