use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use tutor_core::corpus::CorpusProvider;
use tutor_core::translate::PhrasebookTranslator;
use tutor_core::{score_pronunciation, TutorSession};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let phrasebook = CorpusProvider::load()?;
    let translator = PhrasebookTranslator::from_phrases(phrasebook.phrases());
    let mut session = TutorSession::new(translator)?;

    println!("{}", "Tamil Smart Tutor. Type 'exit' to quit.".bold());
    println!("Score a pronunciation with '/score expected | heard'.");
    println!("---------------------------------------------------------------");
    println!("Try one of these:");
    for starter in session.conversation_starters() {
        println!("  - {starter}");
    }

    loop {
        print!("\n{} ", "you>".green());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            s if s.starts_with("/score ") => match s["/score ".len()..].split_once('|') {
                Some((expected, heard)) => {
                    let score = score_pronunciation(expected.trim(), heard.trim());
                    println!("{} {score}/100", "score>".cyan());
                }
                None => println!("Usage: /score expected | heard"),
            },
            s => {
                let message = session.process_message(s).await;
                println!("{} {}", "tutor>".cyan(), message.text);
            }
        }
    }

    Ok(())
}
