//! Command handlers: file I/O plus engine orchestration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use msku_engine::{OrderSource, ReconEngine};
use msku_ingest::parse_table;
use msku_model::{ComboView, DiffEntry, LedgerView, MappingView, ReconcileResponse};

use crate::cli::{InspectArgs, ProcessArgs, ViewArg};

/// Result of a `process` run.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub response: ReconcileResponse,
    /// Ledger entries that now differ from the snapshot.
    pub ledger_diff: Vec<DiffEntry>,
}

/// The view selected by an `inspect` run.
pub enum InspectOutcome {
    Mappings(MappingView),
    Combos(ComboView),
    Ledger(LedgerView),
}

/// Loads master data, processes every order file, reconciles, and
/// returns the response plus the resulting ledger diff.
pub fn run_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let mut engine = ReconEngine::new();
    load_master_data(
        &mut engine,
        &args.mapping,
        args.combos.as_deref(),
        args.inventory.as_deref(),
    )?;

    let mut sources = Vec::with_capacity(args.order_files.len());
    for path in &args.order_files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read order file: {}", path.display()))?;
        sources.push(OrderSource {
            name: file_label(path),
            text,
        });
    }
    let response = engine.process_request(&sources)?;
    Ok(ProcessOutcome {
        ledger_diff: engine.diff_view(),
        response,
    })
}

/// Loads master data and returns the requested read-only view.
pub fn run_inspect(args: &InspectArgs) -> Result<InspectOutcome> {
    let mut engine = ReconEngine::new();
    load_master_data(
        &mut engine,
        &args.mapping,
        args.combos.as_deref(),
        args.inventory.as_deref(),
    )?;
    Ok(match args.view {
        ViewArg::Mappings => InspectOutcome::Mappings(engine.mapping_view()),
        ViewArg::Combos => InspectOutcome::Combos(engine.combo_view()),
        ViewArg::Ledger => InspectOutcome::Ledger(engine.ledger_view()),
    })
}

fn load_master_data(
    engine: &mut ReconEngine,
    mapping: &Path,
    combos: Option<&Path>,
    inventory: Option<&Path>,
) -> Result<()> {
    let table = parse_table(
        &fs::read_to_string(mapping)
            .with_context(|| format!("read mapping file: {}", mapping.display()))?,
    )
    .with_context(|| format!("parse mapping file: {}", mapping.display()))?;
    let mappings = engine.load_mappings(&table);

    let mut combo_count = 0;
    if let Some(path) = combos {
        let table = parse_table(
            &fs::read_to_string(path)
                .with_context(|| format!("read combo file: {}", path.display()))?,
        )
        .with_context(|| format!("parse combo file: {}", path.display()))?;
        combo_count = engine.load_combos(&table);
    }

    let mut items = 0;
    if let Some(path) = inventory {
        let table = parse_table(
            &fs::read_to_string(path)
                .with_context(|| format!("read inventory file: {}", path.display()))?,
        )
        .with_context(|| format!("parse inventory file: {}", path.display()))?;
        items = engine.load_inventory(&table);
    }

    info!(mappings, combos = combo_count, items, "master data loaded");
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
