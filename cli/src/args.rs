use clap::{self, Parser};

#[derive(Debug, Parser)]
#[command(name = "math-random", about = "Draw values from the Tausworthe math.random generator")]
pub struct Opt {
    #[arg(long, help = "Seed the generator before drawing", name = "SEED", allow_hyphen_values = true)]
    pub seed: Option<f64>,

    #[arg(long, help = "Path of a JSON generator config", name = "CONFIG")]
    pub config: Option<String>,

    #[arg(long, help = "Number of values to draw", name = "COUNT", default_value = "1")]
    pub count: usize,

    #[arg(long, help = "Print the final register snapshot as JSON")]
    pub dump_state: bool,

    #[arg(short, long, help = "Log seeding and state changes to stderr")]
    pub verbose: bool,

    #[arg(
        help = "Range arguments forwarded to random (none, max, or min max)",
        name = "ARGS",
        allow_negative_numbers = true
    )]
    pub args: Vec<f64>,
}
