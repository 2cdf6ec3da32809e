use crate::core::{ExecutionMode, SimulationResult};
use crate::services::config::{
    SimulationConfig, DEFAULT_CAPACITY, DEFAULT_CONSUMER_DELAY_MS, DEFAULT_ITEMS,
    DEFAULT_PRODUCER_DELAY_MS,
};
use clap::builder::RangedU64ValueParser;
use clap::Parser;

/// Usage hint printed when the mode argument is not recognised
pub const MODE_USAGE: &str = "Invalid mode. Use: par | seq | both [cap items prod_ms cons_ms]";

#[derive(Parser, Debug)]
#[command(name = "bounded_buffer")]
#[command(about = "Bounded-buffer producer/consumer: sequential vs parallel comparison")]
#[command(version)]
pub struct Cli {
    /// Execution mode: seq, par or both
    #[arg(default_value = "both")]
    pub mode: String,

    /// Buffer capacity
    #[arg(default_value_t = DEFAULT_CAPACITY, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub capacity: usize,

    /// Number of items to produce and consume
    #[arg(default_value_t = DEFAULT_ITEMS, value_parser = clap::value_parser!(u64).range(1..))]
    pub items: u64,

    /// Producer delay per item in milliseconds
    #[arg(default_value_t = DEFAULT_PRODUCER_DELAY_MS)]
    pub producer_delay_ms: u64,

    /// Consumer delay per item in milliseconds
    #[arg(default_value_t = DEFAULT_CONSUMER_DELAY_MS)]
    pub consumer_delay_ms: u64,
}

impl Cli {
    /// 引数から不変の実行設定を組み立てる
    ///
    /// モード文字列はここで解釈する。不正値は何も出力する前にエラーとする。
    pub fn to_config(&self) -> SimulationResult<SimulationConfig> {
        let mode: ExecutionMode = self.mode.parse()?;

        let config = SimulationConfig::new(mode)
            .with_capacity(self.capacity)
            .with_items(self.items)
            .with_producer_delay(self.producer_delay_ms)
            .with_consumer_delay(self.consumer_delay_ms);
        config.validate()?;

        Ok(config)
    }
}
