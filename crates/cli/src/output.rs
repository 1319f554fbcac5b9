use rootwalk_domain::{DomainError, MxRecord, RecordType};
use std::io::{self, Write};

pub fn header(out: &mut impl Write, domain: &str, record_type: RecordType) -> io::Result<()> {
    writeln!(out, "Looking up {} records for {}", record_type, domain)
}

pub fn values(out: &mut impl Write, record_type: RecordType, values: &[String]) -> io::Result<()> {
    writeln!(out, "Found {} {} records", values.len(), record_type)?;
    for (idx, value) in values.iter().enumerate() {
        writeln!(out, "{} {}", idx + 1, value)?;
    }
    Ok(())
}

pub fn cname(out: &mut impl Write, target: &str) -> io::Result<()> {
    writeln!(out, "Found CNAME record {}", target)
}

pub fn mx(out: &mut impl Write, records: &[MxRecord]) -> io::Result<()> {
    writeln!(out, "Found {} MX records", records.len())?;
    for (idx, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{} preference {} host {}",
            idx + 1,
            record.preference,
            record.host
        )?;
    }
    Ok(())
}

pub fn failure(out: &mut impl Write, error: &DomainError) -> io::Result<()> {
    writeln!(out, "Lookup failed: {}", error)
}
