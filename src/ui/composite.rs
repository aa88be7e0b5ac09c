//! Display composition contract and the record render sequence.
//!
//! The panel is driven as a set of named elements: text and images are
//! inserted under fixed ids, flushed to hardware as one frame, and
//! removed again so the composition starts empty each pass.

use log::info;

use crate::config::{
    BARCODE_ELEMENT_ID, BARCODE_IMAGE_PATH, BARCODE_ORIGIN, BARCODE_SIZE, TEXT_ELEMENT_ID,
    TEXT_ORIGIN,
};
use crate::error::Result;
use crate::records::PatientRecord;

/// Composite display collaborator: named, independently insertable and
/// removable text/image regions, flushed to the panel as a unit.
pub trait Composite {
    /// Insert (or replace) a text element.
    fn add_text(&mut self, text: &str, origin: (u32, u32), id: &str) -> Result<()>;

    /// Insert (or replace) an image element loaded from `path`.
    fn add_image(&mut self, path: &str, origin: (u32, u32), size: (u32, u32), id: &str)
        -> Result<()>;

    /// Flush the composed buffer to the physical panel.
    fn write_all(&mut self) -> Result<()>;

    /// Drop a text element from the composition (panel unchanged until
    /// the next flush).
    fn remove_text(&mut self, id: &str) -> Result<()>;

    /// Drop an image element from the composition.
    fn remove_image(&mut self, id: &str) -> Result<()>;

    /// Wipe both the panel and the composition.
    fn clear(&mut self) -> Result<()>;
}

/// Render one record: text block at the top, barcode underneath, flush,
/// then remove both elements so the composition is empty for the next
/// press.
pub fn show_record(panel: &mut impl Composite, record: &PatientRecord) -> Result<()> {
    info!("{}", record.label);
    panel.add_text(record.summary, TEXT_ORIGIN, TEXT_ELEMENT_ID)?;
    panel.add_image(
        BARCODE_IMAGE_PATH,
        BARCODE_ORIGIN,
        BARCODE_SIZE,
        BARCODE_ELEMENT_ID,
    )?;
    panel.write_all()?;
    panel.remove_text(TEXT_ELEMENT_ID)?;
    panel.remove_image(BARCODE_ELEMENT_ID)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mock::{MockPanel, PanelOp};
    use crate::records::RECORDS;

    #[test]
    fn render_sequence_inserts_flushes_then_removes() {
        let mut panel = MockPanel::new();
        show_record(&mut panel, &RECORDS[0]).unwrap();

        assert_eq!(
            panel.ops,
            vec![
                PanelOp::AddText {
                    text: RECORDS[0].summary.into(),
                    origin: TEXT_ORIGIN,
                    id: TEXT_ELEMENT_ID.into(),
                },
                PanelOp::AddImage {
                    path: BARCODE_IMAGE_PATH.into(),
                    origin: BARCODE_ORIGIN,
                    size: BARCODE_SIZE,
                    id: BARCODE_ELEMENT_ID.into(),
                },
                PanelOp::WriteAll,
                PanelOp::RemoveText {
                    id: TEXT_ELEMENT_ID.into(),
                },
                PanelOp::RemoveImage {
                    id: BARCODE_ELEMENT_ID.into(),
                },
            ]
        );
    }

    #[test]
    fn flush_fault_propagates_and_skips_removal() {
        let mut panel = MockPanel::new();
        panel.fail_write = true;

        assert_eq!(show_record(&mut panel, &RECORDS[1]), Err(Error::Display));
        // Both inserts happened, the flush failed, nothing was removed.
        assert_eq!(panel.ops.len(), 3);
        assert_eq!(panel.ops[2], PanelOp::WriteAll);
    }
}
