use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DnsMessage, DomainError, ResourceRecord};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::CodecFailure(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<ResourceRecord> = message.answers().iter().map(Self::classify).collect();
        let authorities: Vec<ResourceRecord> =
            message.name_servers().iter().map(Self::classify).collect();

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = answers.len(),
            authority = authorities.len(),
            "DNS response parsed"
        );

        Ok(DnsMessage {
            id: message.id(),
            response_code: u16::from(message.response_code()),
            answers,
            authorities,
        })
    }

    /// Maps a codec record onto the closed [`ResourceRecord`] variant.
    pub fn classify(record: &Record) -> ResourceRecord {
        match record.data() {
            RData::A(a) => ResourceRecord::A(a.0),
            RData::NS(ns) => ResourceRecord::Ns(ns.0.to_utf8()),
            RData::CNAME(canonical) => ResourceRecord::Cname(canonical.0.to_utf8()),
            RData::SOA(soa) => ResourceRecord::Soa {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
            },
            RData::MX(mx) => ResourceRecord::Mx {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => ResourceRecord::Txt(
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            ),
            other => ResourceRecord::Other(u16::from(other.record_type())),
        }
    }
}
