mod session;

use session::Session;

fn main() -> Result<(), String> {
    let mut session = Session::default();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match session.run(input.as_str()) {
            Err(e) => println!("Parse err: {}", e),
            Ok(out) => print!("{}", out),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("gramatica> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => match session.run(line.as_str()) {
                Err(e) => println!("Parse err: {}", e),
                Ok(out) => {
                    let _ = rl.add_history_entry(&line);
                    print!("{}", out);
                }
            },
        }
    }
}
