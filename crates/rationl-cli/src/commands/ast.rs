//! Show the syntax tree of a pattern.

use rationl_lib::Parser;

pub struct AstArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    match Parser::new(&args.pattern).parse() {
        Ok(ast) => print!("{}", ast.dump()),
        Err(e) => {
            let rendered = e.printer(&args.pattern).path("<pattern>").colored(args.color);
            eprintln!("{}", rendered.render());
            std::process::exit(1);
        }
    }
}
