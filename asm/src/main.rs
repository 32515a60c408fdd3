use clap::Parser;
use color_print::{cformat, cprintln};
use lawdasm::{
    codegen::Encoder,
    generate,
    label::Labels,
    parser::{split_label, Code},
    LineSource, TextSource,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.lawd")]
    output: String,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args: Args = Args::parse();
    println!("LAWD Assembler");

    println!("1. Read Source");
    println!("  < {}", args.input);
    let text = std::fs::read_to_string(&args.input)
        .expect(&cformat!("<red,bold>Failed to open file</>: {}", args.input));
    let mut src = TextSource::new(&text);

    println!("2. Collect Labels");
    let labels = Labels::collect(&mut src);
    println!("  - found #{} labels", labels.len());

    println!("3. Generate Binary");
    src.restart();
    let mut words: Vec<String> = Vec::new();
    if let Err(err) = generate(&mut src, &labels, |w: &str| words.push(w.to_string())) {
        err.print_diag(&args.input);
        std::process::exit(1);
    }
    println!("  - emitted #{} words", words.len());

    println!("  > {}", args.output);
    let listing: String = words.iter().map(|w| w.clone() + "\n").collect();
    std::fs::write(&args.output, listing)
        .expect(&cformat!("<red,bold>Failed to write file</>: {}", args.output));

    if args.dump {
        src.restart();
        dump(&mut src, &labels);
    }
}

/// Per-line listing: line number, program counter, emitted words, source.
fn dump(src: &mut impl LineSource, labels: &Labels) {
    let rule = "------+------+-----------------------------------+---------------------";
    println!("{rule}");
    let mut enc = Encoder::new(labels);
    let mut no = 0;
    while let Some(raw) = src.next_line() {
        no += 1;
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() {
            println!(" {no:>4} |      |");
            continue;
        }
        let (label, rest) = split_label(&words);
        let head = label
            .map(|name| cformat!("<green>{}:</> ", name))
            .unwrap_or_default();
        let pc = enc.pc();
        match rest.split_first() {
            None => {
                let _ = enc.line(None);
                println!(" {no:>4} | {pc:0>4X} | {:<33} | {head}", "");
            }
            Some((op, args)) => match Code::parse(op, args) {
                Ok(code) => match enc.line(Some(&code)) {
                    Ok(insts) => {
                        let bins: Vec<String> = insts.iter().map(|i| i.to_bin()).collect();
                        println!(
                            " {no:>4} | {pc:0>4X} | {:<33} | {head}{}",
                            bins.join(" "),
                            code.cformat()
                        );
                    }
                    Err(err) => cprintln!(" {:>4} | {:0>4X} | <red,bold>!! {}</>", no, pc, err),
                },
                Err(err) => cprintln!(" {:>4} | {:0>4X} | <red,bold>!! {}</>", no, pc, err),
            },
        }
    }
    println!("{rule}");
}
