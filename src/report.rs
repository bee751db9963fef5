//! Analysis results and the consumers that receive them
//!
//! The crate never renders anything itself. A [`ResultConsumer`] gets the
//! finished [`AnalysisReport`] and is free to print, serialize, or plot it.

use std::io::Write;

use serde::Serialize;

use crate::error::MarkovResult;
use crate::regime::{StratifiedEstimate, TransitionCounts, TransitionProbabilities};
use crate::simulation::{SimulatedPaths, SimulationParams};

/// Everything an analysis produced
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub threshold: f64,
    /// Number of classified movements
    pub movements: usize,
    pub counts: TransitionCounts,
    pub probabilities: TransitionProbabilities,
    pub stratified: StratifiedEstimate,
    pub simulation: Option<SimulationReport>,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub params: SimulationParams,
    pub paths: SimulatedPaths,
    pub mean_terminal_price: f64,
    pub min_terminal_price: f64,
    pub max_terminal_price: f64,
    /// Estimate after the last simulated day
    pub final_probabilities: TransitionProbabilities,
}

pub trait ResultConsumer {
    fn consume(&mut self, report: &AnalysisReport) -> MarkovResult<()>;
}

/// Collects reports in memory
impl ResultConsumer for Vec<AnalysisReport> {
    fn consume(&mut self, report: &AnalysisReport) -> MarkovResult<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Human-readable summary
pub struct TextSummary<W: Write> {
    out: W,
}

impl<W: Write> TextSummary<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultConsumer for TextSummary<W> {
    fn consume(&mut self, report: &AnalysisReport) -> MarkovResult<()> {
        let out = &mut self.out;
        let c = &report.counts;
        let p = &report.probabilities;

        writeln!(out, "Movements classified: {} (threshold {})", report.movements, report.threshold)?;
        writeln!(out, "\nTransition counts:")?;
        writeln!(out, "  rise->rise {:>8}   rise->fall {:>8}   (prior rise {})", c.rise_to_rise, c.rise_to_fall, c.total_rise)?;
        writeln!(out, "  fall->rise {:>8}   fall->fall {:>8}   (prior fall {})", c.fall_to_rise, c.fall_to_fall, c.total_fall)?;

        writeln!(out, "\nTransition probabilities:")?;
        writeln!(out, "  P(rise|rise) = {:.4}   P(fall|rise) = {:.4}", p.rise_given_rise, p.fall_given_rise)?;
        writeln!(out, "  P(rise|fall) = {:.4}   P(fall|fall) = {:.4}", p.rise_given_fall, p.fall_given_fall)?;

        let [after_rise, after_fall] = report.stratified.regime_matrices();
        writeln!(out, "\nRegime matrices (rows: from rise, from fall):")?;
        writeln!(out, "  after rise ({} obs): {:.4?}", report.stratified.after_rise.observations, after_rise)?;
        writeln!(out, "  after fall ({} obs): {:.4?}", report.stratified.after_fall.observations, after_fall)?;

        if let Some(sim) = &report.simulation {
            writeln!(
                out,
                "\nAverage final price after {} simulations: {:.4}",
                sim.params.num_paths, sim.mean_terminal_price
            )?;
            writeln!(out, "Terminal range: {:.4} .. {:.4}", sim.min_terminal_price, sim.max_terminal_price)?;
            writeln!(out, "Final P(rise|rise) = {:.4}", sim.final_probabilities.rise_given_rise)?;
        }

        writeln!(out, "Elapsed time: {:.4} seconds", report.elapsed_secs)?;
        Ok(())
    }
}

/// Pretty-printed JSON of the whole report, paths included
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultConsumer for JsonReport<W> {
    fn consume(&mut self, report: &AnalysisReport) -> MarkovResult<()> {
        serde_json::to_writer_pretty(&mut self.out, report).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }
}
