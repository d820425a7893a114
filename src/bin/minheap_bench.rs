//! Command line benchmark driver
//!
//! ```bash
//! minheap-bench insert 10000
//! minheap-bench decrease        # n defaults to 1000
//! minheap-bench all
//! RUST_LOG=debug minheap-bench merge 500
//! ```

use clap::{Parser, ValueEnum};
use indexed_minheap::workload::{self, Operation, ALL_SIZES};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(
    name = "minheap-bench",
    about = "Benchmark IndexedMinHeap operations and report operation counters",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Operation to benchmark
    #[arg(value_enum, ignore_case = true)]
    operation: OperationArg,

    /// Number of elements; falls back to 1000 if missing or not a number
    #[arg(allow_hyphen_values = true)]
    size: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OperationArg {
    /// Benchmark insert operations
    Insert,
    /// Benchmark extract-min operations
    Extract,
    /// Benchmark decrease-key operations
    Decrease,
    /// Benchmark merge operations
    Merge,
    /// Run every benchmark at several sizes
    All,
}

impl OperationArg {
    fn operation(self) -> Option<Operation> {
        match self {
            OperationArg::Insert => Some(Operation::Insert),
            OperationArg::Extract => Some(Operation::Extract),
            OperationArg::Decrease => Some(Operation::Decrease),
            OperationArg::Merge => Some(Operation::Merge),
            OperationArg::All => None,
        }
    }
}

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .unwrap_or_else(|e| eprintln!("logger already initialised: {}", e));

    let cli = Cli::parse();

    match cli.operation.operation() {
        Some(op) => {
            let n = workload::parse_size(cli.size.as_deref());
            println!("{}", workload::run(op, n));
        }
        None => {
            for n in ALL_SIZES {
                info!("benchmarking size {}", n);
                println!("\n{}", "=".repeat(50));
                println!("BENCHMARKING SIZE: {}", n);
                println!("{}", "=".repeat(50));
                for op in Operation::ALL {
                    println!("{}\n", workload::run(op, n));
                }
            }
        }
    }
}
