use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::performance::HistoricalPerformanceRecord;
use crate::models::snapshot::PortfolioSnapshot;

use super::format::{normalize_header, parse_date, parse_number, parse_quantity};

/// A dataset column: display name used in errors, plus accepted header keys
/// (already normalized, see [`normalize_header`]).
struct Column {
    name: &'static str,
    keys: &'static [&'static str],
}

const SYMBOL: Column = Column { name: "Symbol", keys: &["symbol", "ticker"] };
const COMPANY_NAME: Column = Column { name: "Company Name", keys: &["companyname", "name"] };
const QUANTITY: Column = Column { name: "Quantity", keys: &["quantity", "qty"] };
const AVG_PRICE: Column = Column { name: "Avg Price", keys: &["avgprice", "averageprice"] };
const CURRENT_PRICE: Column = Column { name: "Current Price", keys: &["currentprice", "ltp"] };
const SECTOR: Column = Column { name: "Sector", keys: &["sector"] };
const MARKET_CAP: Column = Column { name: "Market Cap", keys: &["marketcap"] };
const EXCHANGE: Column = Column { name: "Exchange", keys: &["exchange"] };
const VALUE: Column = Column { name: "Value", keys: &["value", "marketvalue"] };
const GAIN_LOSS: Column = Column { name: "Gain/Loss", keys: &["gainloss"] };
const GAIN_LOSS_PERCENT: Column = Column {
    name: "Gain/Loss %",
    keys: &["gainlosspct", "gainlosspercent"],
};

const DATE: Column = Column { name: "Date", keys: &["date"] };
const PORTFOLIO_VALUE: Column = Column { name: "Portfolio Value", keys: &["portfoliovalue"] };
const BENCHMARK_VALUE: Column = Column {
    name: "Benchmark Index",
    keys: &["nifty50", "benchmark", "benchmarkindexvalue", "benchmarkvalue"],
};
const ALTERNATIVE_VALUE: Column = Column {
    name: "Alternative Asset",
    keys: &["gold10g", "gold", "alternativeassetvalue", "alternativeasset"],
};
const PORTFOLIO_RETURN: Column = Column {
    name: "Portfolio Return %",
    keys: &["portfolioreturnpct", "portfolioreturn"],
};
const BENCHMARK_RETURN: Column = Column {
    name: "Benchmark Return %",
    keys: &["nifty50returnpct", "nifty50return", "benchmarkreturnpct", "benchmarkreturn"],
};
const ALTERNATIVE_RETURN: Column = Column {
    name: "Alternative Asset Return %",
    keys: &[
        "goldreturnpct",
        "goldreturn",
        "alternativeassetreturnpct",
        "alternativeassetreturn",
    ],
};

/// Header key -> column index for one CSV file.
struct ColumnMap {
    positions: HashMap<String, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins on duplicate headers
            positions.entry(normalize_header(header)).or_insert(idx);
        }
        Self { positions }
    }

    fn find(&self, column: &Column) -> Option<usize> {
        column.keys.iter().find_map(|k| self.positions.get(*k).copied())
    }

    fn require(&self, column: &Column) -> Result<usize, CoreError> {
        self.find(column)
            .ok_or_else(|| CoreError::MissingColumn(column.name.to_string()))
    }
}

/// One data row plus its 1-based line number in the file (header is line 1).
struct Row<'r> {
    record: &'r StringRecord,
    line: usize,
}

impl Row<'_> {
    fn cell(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("").trim()
    }

    fn invalid(&self, column: &Column, idx: usize) -> CoreError {
        CoreError::InvalidValue {
            row: self.line,
            column: column.name.to_string(),
            value: self.cell(idx).to_string(),
        }
    }

    fn text(&self, column: &Column, idx: usize) -> Result<String, CoreError> {
        let cell = self.cell(idx);
        if cell.is_empty() {
            return Err(self.invalid(column, idx));
        }
        Ok(cell.to_string())
    }

    fn number(&self, column: &Column, idx: usize) -> Result<f64, CoreError> {
        parse_number(self.cell(idx)).ok_or_else(|| self.invalid(column, idx))
    }

    /// `Ok(None)` for a missing column or a blank cell.
    fn optional_number(&self, column: &Column, idx: Option<usize>) -> Result<Option<f64>, CoreError> {
        match idx {
            Some(i) if !self.cell(i).is_empty() => self.number(column, i).map(Some),
            _ => Ok(None),
        }
    }

    fn quantity(&self, idx: usize) -> Result<i64, CoreError> {
        parse_quantity(self.cell(idx)).ok_or_else(|| self.invalid(&QUANTITY, idx))
    }

    fn date(&self, idx: usize) -> Result<chrono::NaiveDate, CoreError> {
        parse_date(self.cell(idx)).ok_or_else(|| self.invalid(&DATE, idx))
    }

    fn is_blank(&self) -> bool {
        self.record.iter().all(|c| c.trim().is_empty())
    }
}

/// Reads the two sheets of a portfolio dataset (holdings and historical
/// performance) exported as CSV.
///
/// Headers are matched loosely: original spreadsheet headers such as
/// `"Avg Price ₹"` or `"Portfolio Return %"` and snake_case names both work.
/// Percent cells like `"12.5%"` are converted to fractions.
pub struct DatasetImporter;

impl DatasetImporter {
    /// Parse the holdings sheet.
    ///
    /// `Value`, `Gain/Loss` and `Gain/Loss %` are optional; when absent or
    /// blank they are derived from quantity and prices.
    pub fn holdings_from_reader<R: Read>(reader: R) -> Result<Vec<Holding>, CoreError> {
        let mut csv_reader = csv_reader(reader);
        let columns = ColumnMap::from_headers(csv_reader.headers()?);

        let symbol = columns.require(&SYMBOL)?;
        let company_name = columns.require(&COMPANY_NAME)?;
        let quantity = columns.require(&QUANTITY)?;
        let avg_price = columns.require(&AVG_PRICE)?;
        let current_price = columns.require(&CURRENT_PRICE)?;
        let sector = columns.require(&SECTOR)?;
        let market_cap = columns.require(&MARKET_CAP)?;
        let exchange = columns.require(&EXCHANGE)?;
        let value = columns.find(&VALUE);
        let gain_loss = columns.find(&GAIN_LOSS);
        let gain_loss_percent = columns.find(&GAIN_LOSS_PERCENT);

        let mut holdings = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = Row {
                line: record.position().map_or(idx + 2, |p| p.line() as usize),
                record: &record,
            };
            if row.is_blank() {
                debug!("Skipping blank holdings row {}", row.line);
                continue;
            }

            let mut holding = Holding::new(
                row.text(&SYMBOL, symbol)?,
                row.text(&COMPANY_NAME, company_name)?,
                row.quantity(quantity)?,
                row.number(&AVG_PRICE, avg_price)?,
                row.number(&CURRENT_PRICE, current_price)?,
                row.text(&SECTOR, sector)?,
                row.text(&MARKET_CAP, market_cap)?,
                row.text(&EXCHANGE, exchange)?,
            );

            // Stored figures take precedence over derived ones
            if let Some(v) = row.optional_number(&VALUE, value)? {
                holding.value = v;
            }
            if let Some(g) = row.optional_number(&GAIN_LOSS, gain_loss)? {
                holding.gain_loss = g;
            }
            if let Some(p) = row.optional_number(&GAIN_LOSS_PERCENT, gain_loss_percent)? {
                holding.gain_loss_percent = p;
            }

            holdings.push(holding);
        }

        debug!("Imported {} holdings", holdings.len());
        Ok(holdings)
    }

    /// Parse the historical performance sheet. All seven columns are required.
    pub fn history_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<HistoricalPerformanceRecord>, CoreError> {
        let mut csv_reader = csv_reader(reader);
        let columns = ColumnMap::from_headers(csv_reader.headers()?);

        let date = columns.require(&DATE)?;
        let portfolio_value = columns.require(&PORTFOLIO_VALUE)?;
        let benchmark_value = columns.require(&BENCHMARK_VALUE)?;
        let alternative_value = columns.require(&ALTERNATIVE_VALUE)?;
        let portfolio_return = columns.require(&PORTFOLIO_RETURN)?;
        let benchmark_return = columns.require(&BENCHMARK_RETURN)?;
        let alternative_return = columns.require(&ALTERNATIVE_RETURN)?;

        let mut history = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = Row {
                line: record.position().map_or(idx + 2, |p| p.line() as usize),
                record: &record,
            };
            if row.is_blank() {
                debug!("Skipping blank history row {}", row.line);
                continue;
            }

            history.push(HistoricalPerformanceRecord {
                date: row.date(date)?,
                portfolio_value: row.number(&PORTFOLIO_VALUE, portfolio_value)?,
                benchmark_index_value: row.number(&BENCHMARK_VALUE, benchmark_value)?,
                alternative_asset_value: row.number(&ALTERNATIVE_VALUE, alternative_value)?,
                portfolio_return: row.number(&PORTFOLIO_RETURN, portfolio_return)?,
                benchmark_return: row.number(&BENCHMARK_RETURN, benchmark_return)?,
                alternative_asset_return: row.number(&ALTERNATIVE_RETURN, alternative_return)?,
            });
        }

        debug!("Imported {} historical performance records", history.len());
        Ok(history)
    }

    /// Build a snapshot from two in-memory CSV documents.
    pub fn snapshot_from_bytes(
        holdings_csv: &[u8],
        history_csv: &[u8],
    ) -> Result<PortfolioSnapshot, CoreError> {
        Ok(PortfolioSnapshot::new(
            Self::holdings_from_reader(holdings_csv)?,
            Self::history_from_reader(history_csv)?,
        ))
    }

    /// Build a snapshot from two CSV files on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn snapshot_from_files(
        holdings_path: &str,
        history_path: &str,
    ) -> Result<PortfolioSnapshot, CoreError> {
        let holdings = Self::holdings_from_reader(std::fs::File::open(holdings_path)?)?;
        let history = Self::history_from_reader(std::fs::File::open(history_path)?)?;
        Ok(PortfolioSnapshot::new(holdings, history))
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader)
}
