//! A thin command-line driver over the three demonstration harnesses.

use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bfv_core::Params;
use bfv_harness::{grayscale, matmul, sobel, BorderPolicy};

#[derive(Parser, Debug)]
#[command(name = "bfv-harness")]
#[command(about = "Demonstration harnesses for the BFV homomorphic encryption core", long_about = None)]
struct Cli {
    /// Seed for the demonstration's synthetic inputs and keys, for reproducible runs.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Average synthetic RGB pixels to grayscale under encryption.
    Grayscale {
        /// Number of synthetic pixels to generate.
        #[arg(long, default_value_t = 16)]
        pixels: usize,
    },
    /// Run Sobel edge detection over a synthetic grayscale tile under encryption.
    Sobel {
        #[arg(long, default_value_t = 8)]
        width: usize,
        #[arg(long, default_value_t = 8)]
        height: usize,
        #[arg(long, value_enum, default_value = "zero")]
        border: CliBorderPolicy,
    },
    /// Multiply two synthetic square matrices under encryption.
    Matmul {
        /// Matrix dimension.
        #[arg(long, default_value_t = 8)]
        dim: usize,
        /// Whether to also encrypt the left-hand operand (needs relinearization).
        #[arg(long)]
        cipher_times_cipher: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliBorderPolicy {
    Zero,
    Clamp,
}

impl From<CliBorderPolicy> for BorderPolicy {
    fn from(value: CliBorderPolicy) -> Self {
        match value {
            CliBorderPolicy::Zero => BorderPolicy::Zero,
            CliBorderPolicy::Clamp => BorderPolicy::Clamp,
        }
    }
}

fn main() -> Result<(), bfv_core::BfvError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);

    match cli.command {
        Commands::Grayscale { pixels } => {
            let params = Params::new(16, 1 << 30, 769)?;
            let synthetic: Vec<(u8, u8, u8)> = (0..pixels)
                .map(|_| (rng.gen(), rng.gen(), rng.gen()))
                .collect();
            let result = grayscale::run(&synthetic, &params, &mut rng)?;
            info!(?result, "grayscale output");
        }
        Commands::Sobel { width, height, border } => {
            let params = Params::new(16, 1 << 30, 1 << 10)?;
            let synthetic: Vec<u8> = (0..width * height).map(|_| rng.gen()).collect();
            let result = sobel::run(&synthetic, width, height, border.into(), &params, &mut rng)?;
            info!(?result, "sobel output");
        }
        Commands::Matmul { dim, cipher_times_cipher } => {
            let params = Params::new(16, 1 << 32, 1 << 8)?;
            let mode = if cipher_times_cipher {
                matmul::Mode::CipherTimesCipher
            } else {
                matmul::Mode::CipherTimesPlain
            };
            let a: Vec<Vec<i128>> = (0..dim)
                .map(|_| (0..dim).map(|_| i128::from(rng.gen_range(0..params.t))).collect())
                .collect();
            let b: Vec<Vec<i128>> = (0..dim)
                .map(|_| (0..dim).map(|_| i128::from(rng.gen_range(0..params.t))).collect())
                .collect();
            let result = matmul::run(&a, &b, mode, &params, &mut rng)?;
            let expected = matmul::reference(&a, &b, params.t);
            let matches = result == expected;
            info!(matches, "matmul output matches plaintext reference");
        }
    }

    Ok(())
}
