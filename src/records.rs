//! Hardcoded patient records for the wristband demo.
//!
//! One record per record button. The text blocks are rendered verbatim
//! on the panel, so their line breaks and spacing are part of the data.

/// A wristband record: a diagnostic label for the console and the text
/// block shown on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatientRecord {
    /// Console label identifying which record was selected.
    pub label: &'static str,
    /// Multi-line text block (name, DOB, sex, allergy note).
    pub summary: &'static str,
}

/// Records in button order SW1..SW4. SW5 clears the screen and has no
/// record.
pub const RECORDS: [PatientRecord; 4] = [
    PatientRecord {
        label: "Button1: Thomas Petty",
        summary: "Patient Name:\nPetty, Thomas\nDOB: 01/30/1980\nSex:M NKDA",
    },
    PatientRecord {
        label: "BUTTON2: Maggie Smith",
        summary: "Patient Name:\nSmith, Maggie\nDOB: 02/10/1985\nSex:F NKDA",
    },
    PatientRecord {
        label: "BUTTON3: Johnathan Marks",
        summary: "Patient Name:\nMarks, Johnathan\nDOB: 03/20/1990\nSex:M  NKDA",
    },
    PatientRecord {
        // sic: "Name:nDink" - the deployed wristband content ships with
        // this missing line break, and scanners were calibrated against it.
        label: "BUTTON4: Susan Dink",
        summary: "Patient Name:nDink, Susan\nDOB: 05/18/1970\nSex:F  NKDA",
    },
];
