//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, dispatched and retired instructions, and derived metrics.
//! 2. **Pipeline:** NOP-override (stall) cycles, multi-cycle instructions, and taken branches.
//! 3. **Memory:** Data loads and stores driven on the bus.
//! 4. **Register file:** Writes asserted on each of the three write ports.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total RUNNING cycles elapsed.
    pub cycles: u64,
    /// Instructions decoded from a landed word (NOP overrides excluded).
    pub instructions_dispatched: u64,
    /// Instructions whose final cycle has been stored back.
    pub instructions_retired: u64,

    /// Cycles in which the fetched word was squashed by a multi-cycle instruction.
    pub nop_overrides: u64,
    /// Multi-cycle instructions started, including taken non-delayed branches.
    pub multi_cycle: u64,
    /// Branches and jumps that redirected the PC.
    pub branches_taken: u64,

    /// Data bus read cycles.
    pub loads: u64,
    /// Data bus write cycles.
    pub stores: u64,

    /// Writes asserted on the normal, address-register, and double-word ports.
    pub port_writes: [u64; 3],
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_dispatched: 0,
            instructions_retired: 0,
            nop_overrides: 0,
            multi_cycle: 0,
            branches_taken: 0,
            loads: 0,
            stores: 0,
            port_writes: [0; 3],
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`, `"memory"`, `"registers"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "memory", "registers"];

impl SimStats {
    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        if want("summary") {
            let seconds = self.start_time.elapsed().as_secs_f64();
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_insts.dispatched     {}", self.instructions_dispatched);
            println!("sim_insts.retired        {}", self.instructions_retired);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("pipeline") {
            println!("PIPELINE");
            println!(
                "  stalls.nop_override    {} ({:.2}%)",
                self.nop_overrides,
                pct(self.nop_overrides)
            );
            println!("  multi_cycle            {}", self.multi_cycle);
            println!("  branches.taken         {}", self.branches_taken);
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("DATA BUS");
            println!("  loads                  {} ({:.2}%)", self.loads, pct(self.loads));
            println!("  stores                 {} ({:.2}%)", self.stores, pct(self.stores));
            println!("----------------------------------------------------------");
        }
        if want("registers") {
            let [normal, address, double] = self.port_writes;
            println!("REGISTER WRITE PORTS");
            println!("  port.normal            {normal}");
            println!("  port.address           {address}");
            println!("  port.double            {double}");
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
