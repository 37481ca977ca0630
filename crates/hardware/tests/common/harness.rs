use mipsim_core::Simulator;
use mipsim_core::common::SimResult;
use mipsim_core::config::Config;
use mipsim_core::core::{Cpu, StepOutcome};
use mipsim_core::sim::RunSummary;

#[derive(Debug)]
pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        Self {
            sim: Simulator::new(config),
        }
    }

    /// Context with a memory of `words` cells and otherwise default settings.
    pub fn with_memory(words: usize) -> Self {
        let mut config = Config::default();
        config.memory.words = words;
        Self::with_config(config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Decode and load a sequence of instruction words at address 0.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        let loaded = self.sim.load(instructions).expect("program loads");
        assert_eq!(loaded, instructions.len());
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, code: u8, val: i32) {
        self.sim.cpu.regs.write(code, val).expect("valid register");
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, code: u8) -> i32 {
        self.sim.cpu.regs.read(code).expect("valid register")
    }

    /// Store a data word directly into memory.
    pub fn set_mem(&mut self, addr: i64, val: i32) {
        self.sim.cpu.memory.write_word(addr, val).expect("address in range");
    }

    /// Read a word directly from memory.
    pub fn get_mem(&self, addr: i64) -> i32 {
        self.sim.cpu.memory.read_word(addr).expect("address in range")
    }

    /// Execute a single instruction.
    pub fn step(&mut self) -> StepOutcome {
        self.sim.cpu.step().expect("step succeeds")
    }

    /// Run to halt, panicking on any fault.
    pub fn run(&mut self) -> RunSummary {
        let (result, _) = self.run_traced();
        result.expect("run halts cleanly")
    }

    /// Run to halt or fault, returning the outcome and the trace text.
    pub fn run_traced(&mut self) -> (SimResult<RunSummary>, String) {
        let mut out = Vec::new();
        let result = self.sim.run(&mut out);
        (result, String::from_utf8(out).expect("trace is utf-8"))
    }
}
