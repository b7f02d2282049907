use log::debug;
use rpncalc::{Calculator, Spacing};

mod repl {
    use rpncalc::{format_value, Calculator, ShuntingParser};

    pub fn evalexpr(calc: &Calculator, input: &str) {
        match ShuntingParser::parse_with(input, calc.spacing()) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match calc.eval(&rpn) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => {
                    let infix = rpn.to_infix().unwrap_or_else(|_| input.trim().to_string());
                    println!("{} = {}", infix, format_value(result));
                    println!("  postfix: {}", rpn);
                }
            },
        };
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut calc = Calculator::new();
    if let Some(idx) = args.iter().position(|arg| arg == "--strict") {
        args.remove(idx);
        calc = calc.with_spacing(Spacing::Strict);
    }

    if !args.is_empty() {
        repl::evalexpr(&calc, &args.join(" "));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            debug!("no history at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                repl::evalexpr(&calc, &line);
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
