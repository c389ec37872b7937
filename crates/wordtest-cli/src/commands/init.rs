//! The `wordtest init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("wordtest.toml").exists() {
        println!("wordtest.toml already exists, skipping.");
    } else {
        std::fs::write("wordtest.toml", SAMPLE_CONFIG)?;
        println!("Created wordtest.toml");
    }

    if std::path::Path::new("words.txt").exists() {
        println!("words.txt already exists, skipping.");
    } else {
        std::fs::write("words.txt", SAMPLE_WORDS)?;
        println!("Created words.txt");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to words.txt as `word:meaning`");
    println!("  2. Run: wordtest validate");
    println!("  3. Run: wordtest quiz --size 5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordtest configuration

words_file = "words.txt"
sample_size = 20

# "without_replacement" never asks the same word twice in a round.
sampling = "without_replacement"

# Uncomment for the same round every run.
# seed = 42
"#;

const SAMPLE_WORDS: &str = "\
ephemeral:lasting for a very short time
laconic:using very few words
obdurate:stubbornly refusing to change one's opinion
quixotic:exceedingly idealistic; unrealistic and impractical
sanguine:optimistic or positive, especially in a bad situation
";
