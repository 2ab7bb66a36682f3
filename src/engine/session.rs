use std::io::{BufRead, Write};

use tracing::debug;

use crate::engine::cluster::ClusterGenerator;
use crate::engine::protocol::SessionCommand;
use crate::engine::random_source::RandomSource;

/// Prompt-driven loop: `yes` prints a cluster, `q` (or end of input) stops.
pub struct Session<'a, R, W> {
    generator: ClusterGenerator<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(generator: ClusterGenerator<'a>, input: R, output: W) -> Self {
        Self {
            generator,
            input,
            output,
        }
    }

    /// Returns how many clusters were printed.
    pub fn run(&mut self, rng: &mut dyn RandomSource) -> std::io::Result<usize> {
        writeln!(self.output, "Quantum-random grammar-aware sentence generator.")?;
        writeln!(self.output, "Type 'yes' to generate a cluster, 'q' to quit.")?;

        let mut clusters = 0;
        let mut line = String::new();
        loop {
            write!(self.output, "Generate next cluster? (yes/q): ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                writeln!(self.output)?;
                break;
            }

            match SessionCommand::parse(&line) {
                SessionCommand::Generate => {
                    let cluster = self.generator.generate_cluster(rng);
                    writeln!(self.output, "Cluster of {} sentences:", cluster.len())?;
                    for sentence in &cluster {
                        writeln!(self.output, "{}", sentence)?;
                    }
                    writeln!(self.output)?;
                    clusters += 1;
                }
                SessionCommand::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                SessionCommand::Unknown(other) => {
                    debug!(input = %other, "unrecognised session input");
                    writeln!(self.output, "Please type 'yes' to generate or 'q' to quit.")?;
                }
            }
        }

        Ok(clusters)
    }
}
