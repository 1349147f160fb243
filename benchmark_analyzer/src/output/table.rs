//!
//! The result tables.
//!

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::model::run_group_instance::RunGroupInstance;
use crate::output::field::format_fraction;
use crate::output::field::format_integer;
use crate::output::field::Field;
use crate::results::RunResults;

///
/// The tables of all instances executed so far.
///
#[derive(Debug, Clone, Copy)]
pub struct ResultTables<'a> {
    /// The executed instances, in the execution order.
    instances: &'a [RunGroupInstance],
    /// The execution-only sweep thread counts.
    sweep_threads: &'a [usize],
}

impl<'a> ResultTables<'a> {
    /// The identity columns leading every table.
    pub const LEADING_HEADERS: [&'static str; 5] = [
        "transaction_type",
        "module_working_set",
        "executor",
        "block_size",
        "expected t/s",
    ];

    /// The columns of the full table.
    pub const FULL_HEADERS: [&'static str; 11] = [
        "t/s",
        "exe/total",
        "vm/exe",
        "commit/total",
        "g/s",
        "eff g/s",
        "io g/s",
        "exe g/s",
        "g/t",
        "fee/t",
        "out B/s",
    ];

    /// The placeholder of a sweep column the instance has no result for.
    pub const MISSING: &'static str = "-";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(instances: &'a [RunGroupInstance], sweep_threads: &'a [usize]) -> Self {
        Self {
            instances,
            sweep_threads,
        }
    }

    ///
    /// The table of one metric, with the sweep columns if the metric depends on the parallelism.
    ///
    pub fn single(&self, field: Field) -> Table {
        let mut headers = Self::LEADING_HEADERS
            .iter()
            .map(|header| header.to_string())
            .collect::<Vec<String>>();
        if field.by_levels() {
            headers.extend(
                self.sweep_threads
                    .iter()
                    .map(|threads| format!("exe_only {threads}")),
            );
        }
        headers.push(field.header().to_owned());

        let mut table = Self::table(headers);
        for instance in self.instances.iter() {
            let mut row = Self::leading_cells(instance);
            if field.by_levels() {
                row.extend(self.sweep_threads.iter().map(|threads| {
                    instance
                        .number_of_threads_results
                        .get(threads)
                        .map(|results| field.format(results))
                        .unwrap_or_else(|| Self::MISSING.to_owned())
                }));
            }
            row.push(field.format(&instance.single_node_result));
            table.add_row(row);
        }
        table
    }

    ///
    /// The table of all metrics of the main runs.
    ///
    pub fn full(&self) -> Table {
        let headers = Self::LEADING_HEADERS
            .iter()
            .chain(Self::FULL_HEADERS.iter())
            .map(|header| header.to_string())
            .collect::<Vec<String>>();

        let mut table = Self::table(headers);
        for instance in self.instances.iter() {
            let mut row = Self::leading_cells(instance);
            row.extend(Self::full_cells(&instance.single_node_result));
            table.add_row(row);
        }
        table
    }

    ///
    /// All single-field tables followed by the full table.
    ///
    pub fn all(&self) -> Vec<Table> {
        let mut tables = Field::ALL
            .into_iter()
            .map(|field| self.single(field))
            .collect::<Vec<Table>>();
        tables.push(self.full());
        tables
    }

    ///
    /// Creates an empty table with the headers.
    ///
    fn table(headers: Vec<String>) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(headers);
        table
    }

    ///
    /// The identity cells of the instance.
    ///
    fn leading_cells(instance: &RunGroupInstance) -> Vec<String> {
        vec![
            instance.key.transaction_type.clone(),
            instance.key.module_working_set_size.to_string(),
            instance.key.executor_type.to_string(),
            instance.block_size.to_string(),
            format_integer(instance.expected_tps),
        ]
    }

    ///
    /// The metric cells of the full table.
    ///
    fn full_cells(results: &RunResults) -> Vec<String> {
        vec![
            format_integer(results.tps),
            format_fraction(results.fraction_in_execution),
            format_fraction(results.fraction_of_execution_in_vm),
            format_fraction(results.fraction_in_commit),
            format_integer(results.gps),
            format_integer(results.effective_gps),
            format_integer(results.io_gps),
            format_integer(results.execution_gps),
            format_integer(results.gpt),
            format_integer(results.storage_fee_pt),
            format_integer(results.output_bps),
        ]
    }
}

impl std::fmt::Display for ResultTables<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for table in self.all() {
            writeln!(f, "{table}")?;
        }
        Ok(())
    }
}
