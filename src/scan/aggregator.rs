use std::collections::HashMap;

use crate::extract::DurationExtractor;
use crate::model::{series_identity, MetadataRecord, ScanReport, ScanStats, SeriesEntry, SeriesRow};

/// Groups records into series and keeps the first duration found for each.
#[derive(Debug)]
pub struct SeriesAggregator<'a> {
    extractor: &'a DurationExtractor,
    index: HashMap<String, usize>,
    entries: Vec<SeriesEntry>,
}

impl<'a> SeriesAggregator<'a> {
    pub fn new(extractor: &'a DurationExtractor) -> Self {
        Self {
            extractor,
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Counts one instance toward its series. The extractor only runs while
    /// the series has no duration yet.
    pub fn observe<R: MetadataRecord + ?Sized>(&mut self, record: &R) {
        let identity = series_identity(record);
        let position = match self.index.get(&identity) {
            Some(&position) => position,
            None => {
                log::debug!("New series {identity}");
                self.entries
                    .push(SeriesEntry::from_record(identity.clone(), record));
                self.index.insert(identity, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[position];
        entry.instance_count += 1;
        if !entry.has_duration() {
            let duration = self.extractor.extract(record);
            if duration.is_found() {
                log::debug!(
                    "Series {} ({}): {:?}s from {}",
                    entry.label,
                    entry.identity,
                    duration.seconds,
                    duration.tag_used
                );
                entry.duration = duration;
            }
        }
    }

    pub fn series_count(&self) -> usize {
        self.entries.len()
    }

    /// Rows sorted by series label (ties keep first-seen order), followed by
    /// the total row.
    pub fn finish(self, files_checked: u64, files_dicom: u64) -> ScanReport {
        let mut entries = self.entries;
        entries.sort_by(|a, b| a.label.cmp(&b.label));

        let series_count = entries.len() as u64;
        let series_with_time = entries.iter().filter(|e| e.has_duration()).count() as u64;
        let total = entries
            .iter()
            .filter_map(|entry| entry.duration.seconds)
            .fold(None, |sum: Option<f64>, seconds| Some(sum.unwrap_or(0.0) + seconds));

        let mut rows: Vec<SeriesRow> = entries.into_iter().map(SeriesRow::from).collect();
        rows.push(SeriesRow::total(total));

        ScanReport {
            rows,
            stats: ScanStats {
                files_checked,
                files_dicom,
                series_count,
                series_with_time,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{TaGrammar, SIEMENS_TA};
    use crate::model::{MemoryRecord, UNKNOWN_IDENTITY};
    use dicom::dictionary_std::tags;

    fn extractor() -> DurationExtractor {
        DurationExtractor::new(TaGrammar::new().unwrap())
    }

    fn instance(series_uid: &str, description: &str) -> MemoryRecord {
        MemoryRecord::new()
            .with(tags::MANUFACTURER, "SIEMENS")
            .with(tags::SERIES_INSTANCE_UID, series_uid)
            .with(tags::SERIES_DESCRIPTION, description)
    }

    #[test]
    fn first_successful_record_wins() {
        let extractor = extractor();
        let mut aggregator = SeriesAggregator::new(&extractor);

        aggregator.observe(&instance("1.1", "t2_tse"));
        aggregator.observe(&instance("1.1", "t2_tse").with(SIEMENS_TA, "TA 01:08*2"));
        aggregator.observe(&instance("1.1", "t2_tse").with(SIEMENS_TA, "TA 09:00"));

        let report = aggregator.finish(3, 3);
        let row = &report.series_rows()[0];
        assert_eq!(row.number_of_instances, Some(3));
        assert_eq!(row.seconds, Some(136.0));
        assert_eq!(row.raw_value.as_deref(), Some("TA 01:08*2"));
        assert_eq!(report.stats.series_with_time, 1);
    }

    #[test]
    fn records_without_uids_share_one_series() {
        let extractor = extractor();
        let mut aggregator = SeriesAggregator::new(&extractor);
        aggregator.observe(&MemoryRecord::new().with(tags::SERIES_NUMBER, "4"));
        aggregator.observe(&MemoryRecord::new().with(tags::SERIES_NUMBER, "5"));
        aggregator.observe(&MemoryRecord::new().with(tags::STUDY_INSTANCE_UID, "9.9"));

        assert_eq!(aggregator.series_count(), 2);
        let report = aggregator.finish(3, 3);
        let unknown = report
            .series_rows()
            .iter()
            .find(|row| row.series_identity.as_deref() == Some(UNKNOWN_IDENTITY))
            .unwrap();
        assert_eq!(unknown.series, "Series 4");
        assert_eq!(unknown.number_of_instances, Some(2));
    }

    #[test]
    fn rows_are_sorted_by_label_and_end_with_the_total() {
        let extractor = extractor();
        let mut aggregator = SeriesAggregator::new(&extractor);
        aggregator.observe(&instance("1.3", "t2_tse TA 02:00"));
        aggregator.observe(&instance("1.1", "localizer"));
        aggregator.observe(&instance("1.2", "dwi TA 30*2"));

        let report = aggregator.finish(3, 3);
        let labels: Vec<_> = report.rows.iter().map(|row| row.series.as_str()).collect();
        assert_eq!(
            labels,
            ["dwi TA 30*2", "localizer", "t2_tse TA 02:00", "TotalScanTime"]
        );

        let total = report.total().unwrap();
        assert_eq!(total.seconds, Some(180.0));
        assert_eq!(total.scan_time.as_deref(), Some("3 min 0 sec"));
        assert_eq!(total.number_of_instances, None);
        assert_eq!(
            report.stats,
            ScanStats {
                files_checked: 3,
                files_dicom: 3,
                series_count: 3,
                series_with_time: 2,
            }
        );
    }

    #[test]
    fn total_is_null_when_no_series_has_a_duration() {
        let extractor = extractor();
        let mut aggregator = SeriesAggregator::new(&extractor);
        aggregator.observe(&instance("1.1", "localizer"));

        let report = aggregator.finish(1, 1);
        assert_eq!(report.total().unwrap().seconds, None);
        assert_eq!(report.total().unwrap().scan_time, None);
    }

    #[test]
    fn empty_runs_still_produce_the_total_row() {
        let extractor = extractor();
        let report = SeriesAggregator::new(&extractor).finish(0, 0);
        assert!(report.is_empty());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.total().unwrap().seconds, None);
    }

    #[test]
    fn series_count_does_not_depend_on_order() {
        let records = [
            instance("1.1", "a"),
            instance("1.2", "b"),
            instance("1.1", "a"),
            MemoryRecord::new(),
            instance("1.3", "c"),
        ];
        let extractor = extractor();

        let mut forward = SeriesAggregator::new(&extractor);
        records.iter().for_each(|record| forward.observe(record));
        let mut backward = SeriesAggregator::new(&extractor);
        records.iter().rev().for_each(|record| backward.observe(record));

        assert_eq!(forward.series_count(), 4);
        assert_eq!(backward.series_count(), 4);
    }
}
