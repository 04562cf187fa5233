use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use prefix_expression::interpreter::{describe, parse_prefix};

/// Evaluates the given prefix expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(+ x (negate 2))"
    expression: String,

    /// Value substituted for x
    #[clap(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    x: f64,

    /// Value substituted for y
    #[clap(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    y: f64,

    /// Value substituted for z
    #[clap(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    z: f64,

    /// Also draw the expression as a tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let tree = parse_prefix(&args.expression)
        .with_context(|| format!("Could not parse expression {:?}", args.expression))?;
    info!("Evaluating with x = {}, y = {}, z = {}", args.x, args.y, args.z);

    println!("{}", describe(&tree, args.x, args.y, args.z)?);
    if args.tree {
        print!("{}", tree.to_tree()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_valid() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn variables_default_to_zero() {
        let args = Arguments::try_parse_from(["prefix-expression", "(+ x 1)"]).unwrap();

        assert_eq!((args.x, args.y, args.z), (0.0, 0.0, 0.0));
        assert!(!args.tree);
    }

    #[test]
    fn negative_variable_values_are_accepted() {
        let args = Arguments::try_parse_from([
            "prefix-expression",
            "(med3 x y z)",
            "-x",
            "-2.5",
            "--z",
            "-1",
            "--tree",
        ])
        .unwrap();

        assert_eq!(args.expression, "(med3 x y z)");
        assert_eq!((args.x, args.y, args.z), (-2.5, 0.0, -1.0));
        assert!(args.tree);
    }
}
