//! JSON view dari `DecodedPacket`
//!
//! Key sama persis dengan field struct, raw bytes jadi hex string:
//!
//! ```text
//! { "header": {..., "receiver_label", "next_node_label"},
//!   "payload_type": "payload_ann",
//!   "payload": { "name_size": 6, "name_raw": "4e6f64652031", "name_text": "Node 1" },
//!   "payload_len": 7 }
//! ```

use serde::{Serialize, Serializer};

use crate::input::SnifferRecord;
use crate::protocol::{DecodedPacket, Payload};

#[derive(Serialize)]
struct HeaderView<'a> {
    netid: u8,
    ttl: u8,
    receiver: u8,
    sender: u8,
    last_node: u8,
    next_node: u8,
    id: u32,
    #[serde(rename = "type")]
    packet_type: u8,
    receiver_label: &'a str,
    next_node_label: &'a str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PayloadView<'a> {
    Message {
        message_size: u8,
        message_raw: String,
        message_text: &'a str,
    },
    Ack {
        packet_id: u32,
    },
    Announce {
        name_size: u8,
        name_raw: String,
        name_text: &'a str,
    },
}

impl<'a> From<&'a Payload> for PayloadView<'a> {
    fn from(payload: &'a Payload) -> Self {
        match payload {
            Payload::Message(msg) => Self::Message {
                message_size: msg.message_size,
                message_raw: hex::encode(&msg.message_raw),
                message_text: &msg.message_text,
            },
            Payload::Ack(ack) => Self::Ack {
                packet_id: ack.packet_id,
            },
            Payload::Announce(ann) => Self::Announce {
                name_size: ann.name_size,
                name_raw: hex::encode(&ann.name_raw),
                name_text: &ann.name_text,
            },
        }
    }
}

#[derive(Serialize)]
struct PacketView<'a> {
    header: HeaderView<'a>,
    payload_type: &'static str,
    payload: PayloadView<'a>,
    payload_len: usize,
}

impl<'a> From<&'a DecodedPacket> for PacketView<'a> {
    fn from(packet: &'a DecodedPacket) -> Self {
        let h = &packet.header;
        Self {
            header: HeaderView {
                netid: h.netid,
                ttl: h.ttl,
                receiver: h.receiver,
                sender: h.sender,
                last_node: h.last_node,
                next_node: h.next_node,
                id: h.id,
                packet_type: h.packet_type,
                receiver_label: &packet.receiver_label,
                next_node_label: &packet.next_node_label,
            },
            payload_type: packet.payload_type(),
            payload: PayloadView::from(&packet.payload),
            payload_len: packet.payload_len,
        }
    }
}

impl Serialize for DecodedPacket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PacketView::from(self).serialize(serializer)
    }
}

/// Paket plus metadata radio dari sniffer record
#[derive(Serialize)]
pub struct RecordOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snr: Option<f32>,
    pub packet: &'a DecodedPacket,
}

impl<'a> RecordOutput<'a> {
    pub fn new(record: &SnifferRecord, packet: &'a DecodedPacket) -> Self {
        Self {
            channel: record.channel,
            rssi: record.rssi,
            snr: record.snr,
            packet,
        }
    }
}

/// Pretty JSON, indentasi 2 spasi
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Satu record per baris
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
