// Demo runner for the anyopt engine.
//
// Declares a small but representative option set, resolves a config file
// (path taken from ANYOPT_DEMO_CONFIG, if set) followed by the real argv,
// and prints the resolved state in a stable key=value format. The smoke
// tests drive this binary and assert on its output; diagnostics go to
// stderr through env_logger when RUST_LOG allows them.

use anyopt::{AnyOption, Opt};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> anyopt::Result<()> {
    let mut opt = AnyOption::new();
    opt.set_verbose();

    build(&mut opt)?;

    if let Ok(config) = std::env::var("ANYOPT_DEMO_CONFIG") {
        let loaded = opt.process_file(&config);
        println!("config={}", loaded);
    }

    let argv: Vec<String> = std::env::args().collect();
    opt.process_args(&argv);

    report(&opt);
    Ok(())
}

fn build(opt: &mut AnyOption) -> anyopt::Result<()> {
    opt.add_usage("usage: demo [options] [files]")?;
    opt.add_usage("  -w, --width NUM    output width")?;
    opt.add_usage("  -t, --title TEXT   title (command line only)")?;
    opt.add_usage("      cache : DIR    cache directory (config file only)")?;
    opt.add_usage("  -v, --verbose      note every step")?;
    opt.add_usage("      noimages       config-file flag: skip images")?;

    opt.declare(Opt::value("width").alias('w'))?;
    opt.declare(Opt::value("title").alias('t').command_only())?;
    opt.declare(Opt::value("cache").file_only())?;
    opt.declare(Opt::flag("verbose").alias('v'))?;
    opt.declare(Opt::flag("noimages").file_only())?;
    Ok(())
}

fn report(opt: &AnyOption) {
    for name in ["width", "title", "cache"] {
        match opt.value(name) {
            Some(value) => println!("{}={}", name, value),
            None => println!("{}=<unset>", name),
        }
    }
    println!("verbose={}", opt.flag("verbose"));
    println!("noimages={}", opt.flag("noimages"));
    for (i, arg) in opt.args().enumerate() {
        println!("arg{}={}", i, arg);
    }
}
