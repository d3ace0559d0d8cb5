//! Tokenize a small program and print each record with its location.

fn main() {
    let source = "\
int count is 10.
text msg is \"done\". /* greeting
   spans lines */
loop count times { write -1. }
write msg, 1234567890.
/* left open
";

    for record in stalex::tokenize(source) {
        let span = record.span();
        println!("{:>3}:{:<3} {record}", span.line, span.column);
    }

    println!();

    let mut report = Vec::new();
    match stalex::analyze(source.as_bytes(), &mut report, stalex::Limits::default()) {
        Ok(summary) => println!(
            "{} token(s), {} diagnostic(s), unclosed comment: {}",
            summary.tokens, summary.diagnostics, summary.unclosed_comment
        ),
        Err(e) => println!("Error: {e}"),
    }
}
