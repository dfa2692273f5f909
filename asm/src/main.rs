use color_print::cformat;
use hackasm::{util::print_dump, Error};
use std::{
    io::{Read, Write},
    process::ExitCode,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file [default: stdin]
    input: Option<String>,

    /// Output file [default: stdout]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump annotated listing to stderr
    #[clap(short, long)]
    dump: bool,

    /// Write symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Suppress progress messages
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    let path = args.input.clone().unwrap_or_else(|| "<stdin>".to_string());

    macro_rules! progress {
        ($($arg:tt)*) => {
            if !args.quiet {
                eprintln!($($arg)*);
            }
        };
    }

    progress!("{}", cformat!("<s>Hack Assembler</>"));

    progress!("1. Read Source");
    progress!("  < {}", path);
    let src = match read_source(args.input.as_deref()) {
        Ok(src) => src,
        Err(err) => {
            err.print_diag(&path, "");
            return ExitCode::FAILURE;
        }
    };

    progress!("2. Collect Labels & Generate Binary");
    let program = match hackasm::assemble(&src) {
        Ok(program) => program,
        Err(err) => {
            err.print_diag(&path, &src);
            return ExitCode::FAILURE;
        }
    };
    progress!("  - {} instructions, {} symbols", program.words.len(), program.symbols.len());

    if args.dump {
        print_dump(&path, &src, &program);
    }

    progress!("3. Write Output");
    let written = write_output(args.output.as_deref(), &program.to_text()).and_then(|_| {
        match &args.symbols {
            Some(sym_path) => {
                let yaml = program.symbols.to_yaml().map_err(Error::Serialize)?;
                write_output(Some(sym_path), &yaml)
            }
            None => Ok(()),
        }
    });
    if let Err(err) = written {
        err.print_diag(&path, &src);
        return ExitCode::FAILURE;
    }
    progress!("  > {}", args.output.as_deref().unwrap_or("<stdout>"));

    ExitCode::SUCCESS
}

fn read_source(path: Option<&str>) -> Result<String, Error> {
    let mut src = String::new();
    match path {
        Some(path) => {
            let mut file =
                std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
            file.read_to_string(&mut src).map_err(Error::FileRead)?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(Error::FileRead)?;
        }
    }
    Ok(src)
}

fn write_output(path: Option<&str>, text: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            let mut file =
                std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
            file.write_all(text.as_bytes())
                .map_err(|e| Error::FileWrite(path.to_string(), e))
        }
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| Error::FileWrite("<stdout>".to_string(), e)),
    }
}
