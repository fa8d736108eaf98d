//! Derivation of the paired-end FASTQ paths for each samplesheet row.
//!
//! Reads for a run and lane live under
//! `<base_dir><platform>/<run>/<lane>/<run>_<lane>_read_{1,2}.fq.gz`.
//! The base directory is prepended verbatim, it is not joined as a path.
use crate::{error::SamplesheetError, samplesheet::Samplesheet};

/// Where the raw FASTQ directory tree lives unless told otherwise.
pub const DEFAULT_BASE_DIR: &str = "/datos/ngs/dato-activo/data/02_rfastq/";

pub const FASTQ1_COLUMN: &str = "fastq1";
pub const FASTQ2_COLUMN: &str = "fastq2";

const READ_1_SUFFIX: &str = "_read_1.fq.gz";
const READ_2_SUFFIX: &str = "_read_2.fq.gz";

/// Builds read paths from `platform`, `run` and `lane`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqTemplate {
    base_dir: String,
}

impl Default for FastqTemplate {
    fn default() -> Self {
        FastqTemplate::new(DEFAULT_BASE_DIR)
    }
}

impl FastqTemplate {
    pub fn new(base_dir: impl Into<String>) -> Self {
        FastqTemplate {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn read_path(&self, platform: &str, run: &str, lane: &str, suffix: &str) -> String {
        format!(
            "{}{}/{}/{}/{}_{}{}",
            self.base_dir, platform, run, lane, run, lane, suffix
        )
    }

    /// Paths to read 1 and read 2 for one run and lane.
    pub fn paths(&self, platform: &str, run: &str, lane: &str) -> (String, String) {
        (
            self.read_path(platform, run, lane, READ_1_SUFFIX),
            self.read_path(platform, run, lane, READ_2_SUFFIX),
        )
    }
}

/// Fill in `fastq1` and `fastq2` for every row of `sheet`.
///
/// Fails before touching any row if `platform`, `run` or `lane` is missing.
/// Rows where one of those is empty get empty paths. Existing `fastq1`/`fastq2`
/// columns are overwritten, so running twice gives the same sheet.
pub fn add_fastq_columns(
    sheet: &mut Samplesheet,
    template: &FastqTemplate,
) -> Result<(), SamplesheetError> {
    let platform_col = sheet.column_index("platform")?;
    let run_col = sheet.column_index("run")?;
    let lane_col = sheet.column_index("lane")?;

    let mut fastq1 = Vec::with_capacity(sheet.len());
    let mut fastq2 = Vec::with_capacity(sheet.len());
    for (i, row) in sheet.rows().iter().enumerate() {
        let platform = &row[platform_col];
        let run = &row[run_col];
        let lane = &row[lane_col];
        if platform.is_empty() || run.is_empty() || lane.is_empty() {
            // Header is line 1.
            log::warn!(
                "Line {}: empty platform, run or lane, leaving fastq paths blank",
                i + 2
            );
            fastq1.push(String::new());
            fastq2.push(String::new());
            continue;
        }
        let (r1, r2) = template.paths(platform, run, lane);
        fastq1.push(r1);
        fastq2.push(r2);
    }

    sheet.set_column(FASTQ1_COLUMN, fastq1);
    sheet.set_column(FASTQ2_COLUMN, fastq2);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    fn sheet(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> Samplesheet {
        Samplesheet::new(
            StringRecord::from(headers),
            rows.into_iter().map(StringRecord::from).collect(),
        )
    }

    #[test]
    fn test_default_paths() {
        let (r1, r2) = FastqTemplate::default().paths("illumina", "RUN01", "L001");
        assert_eq!(
            r1,
            "/datos/ngs/dato-activo/data/02_rfastq/illumina/RUN01/L001/RUN01_L001_read_1.fq.gz"
        );
        assert_eq!(
            r2,
            "/datos/ngs/dato-activo/data/02_rfastq/illumina/RUN01/L001/RUN01_L001_read_2.fq.gz"
        );
    }

    #[test]
    fn test_custom_base_dir_is_prepended_verbatim() {
        let (r1, _) = FastqTemplate::new("/scratch/").paths("mgi", "R7", "3");
        assert_eq!(r1, "/scratch/mgi/R7/3/R7_3_read_1.fq.gz");
        let (r1, _) = FastqTemplate::new("reads_").paths("mgi", "R7", "3");
        assert_eq!(r1, "reads_mgi/R7/3/R7_3_read_1.fq.gz");
    }

    #[test]
    fn test_add_columns_keeps_order_and_count() {
        let mut s = sheet(
            vec!["sample", "platform", "run", "lane"],
            vec![
                vec!["s1", "illumina", "RUN01", "L001"],
                vec!["s2", "illumina", "RUN01", "L002"],
            ],
        );
        add_fastq_columns(&mut s, &FastqTemplate::new("/b/")).unwrap();
        assert_eq!(
            s.headers(),
            &StringRecord::from(vec!["sample", "platform", "run", "lane", "fastq1", "fastq2"])
        );
        assert_eq!(s.len(), 2);
        assert_eq!(&s.rows()[1][0], "s2");
        assert_eq!(&s.rows()[1][4], "/b/illumina/RUN01/L002/RUN01_L002_read_1.fq.gz");
        assert_eq!(&s.rows()[1][5], "/b/illumina/RUN01/L002/RUN01_L002_read_2.fq.gz");
    }

    #[test]
    fn test_missing_lane_column() {
        let mut s = sheet(vec!["platform", "run"], vec![vec!["illumina", "RUN01"]]);
        let before = s.clone();
        match add_fastq_columns(&mut s, &FastqTemplate::default()) {
            Err(SamplesheetError::MissingColumn { column }) => assert_eq!(column, "lane"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s, before);
    }

    #[test]
    fn test_empty_value_gives_blank_paths() {
        let mut s = sheet(vec!["platform", "run", "lane"], vec![vec!["illumina", "", "L001"]]);
        add_fastq_columns(&mut s, &FastqTemplate::default()).unwrap();
        assert_eq!(&s.rows()[0][3], "");
        assert_eq!(&s.rows()[0][4], "");
    }

    #[test]
    fn test_rerun_overwrites_existing_columns() {
        let mut s = sheet(vec!["platform", "run", "lane"], vec![vec!["illumina", "RUN01", "L001"]]);
        add_fastq_columns(&mut s, &FastqTemplate::default()).unwrap();
        let once = s.clone();
        add_fastq_columns(&mut s, &FastqTemplate::default()).unwrap();
        assert_eq!(s, once);
        assert_eq!(s.headers().len(), 5);
    }

    #[test]
    fn test_header_only() {
        let mut s = sheet(vec!["platform", "run", "lane"], vec![]);
        add_fastq_columns(&mut s, &FastqTemplate::default()).unwrap();
        assert_eq!(
            s.headers(),
            &StringRecord::from(vec!["platform", "run", "lane", "fastq1", "fastq2"])
        );
        assert!(s.is_empty());
    }
}
