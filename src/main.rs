// src/main.rs
use anyhow::Result;

use macro_sim::config::Config;
use macro_sim::market::{FileFeed, FixedFundamentalsFeed};
use macro_sim::{dashboard, logger, report};

#[tokio::main]
async fn main() -> Result<()> {
    // 1) .env, конфиг (аргументы `key=value` перекрывают файл и окружение) и логгер
    dotenv::dotenv().ok();
    let cfg = Config::load(std::env::args().skip(1))?;
    logger::init(&cfg);

    // 2) входы с ползунков
    let inputs = cfg.scenario.to_inputs();

    // 3) фид: снимки из data_dir + фиксированные показатели из конфига
    let feed = FixedFundamentalsFeed::new(FileFeed::new(&cfg.data_dir), cfg.fixed_fundamentals());

    // 4) перерисовка и вывод
    let view = dashboard::redraw(inputs, &cfg.equities, &feed, cfg.return_period).await;
    print!("{}", report::render(&view));
    Ok(())
}
