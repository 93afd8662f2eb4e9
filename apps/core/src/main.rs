// SentiBot CLI entry point.
// Startup sequence: dataset + embeddings -> train classifier -> dialogue loop.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentibot_core::analysis::dependency::CoreNlpClient;
use sentibot_core::classifier::LogisticRegression;
use sentibot_core::config::Config;
use sentibot_core::dataset;
use sentibot_core::dialogue::{ConsoleIo, DialogueEngine};
use sentibot_core::embedding::EmbeddingTable;
use sentibot_core::transcript::TranscriptLogger;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // Diagnostics go to stderr; stdout belongs to the dialogue.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    let (documents, labels) =
        dataset::load(&config.dataset_path).context("failed to load training dataset")?;
    let table =
        EmbeddingTable::load(&config.embedding_path).context("failed to load embedding table")?;

    let vectors: Vec<Vec<f32>> = documents.iter().map(|doc| table.average(doc)).collect();
    let model = LogisticRegression::train(&vectors, &labels)
        .context("failed to train sentiment classifier")?;
    let metrics = model.evaluate(&vectors, &labels)?;
    info!(
        precision = metrics.precision,
        recall = metrics.recall,
        f1 = metrics.f1,
        accuracy = metrics.accuracy,
        "classifier trained"
    );

    let parser = CoreNlpClient::new(&config.parser_url)?;
    let log = TranscriptLogger::create(&config.transcript_dir)?;

    let mut io = ConsoleIo;
    let mut engine = DialogueEngine::new(&mut io, &table, &model, parser, log);
    engine.run()?;
    let transcript = engine.finish()?;
    info!(transcript = %transcript.display(), "session complete");

    Ok(())
}
