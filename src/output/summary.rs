//! One-line text rendering untuk monitoring di terminal

use crate::protocol::{DecodedPacket, Payload};

/// Contoh: `#000001fb net=0x79 ttl=2 1 -> broadcast via broadcast ann "Node 1" (7 bytes)`
pub fn summary(packet: &DecodedPacket) -> String {
    let h = &packet.header;
    let body = match &packet.payload {
        Payload::Message(msg) => format!("msg {:?}", msg.message_text),
        Payload::Ack(ack) => format!("ack #{:08x}", ack.packet_id),
        Payload::Announce(ann) => format!("ann {:?}", ann.name_text),
    };

    format!(
        "#{:08x} net=0x{:02x} ttl={} {} -> {} via {} {} ({} bytes)",
        h.id,
        h.netid,
        h.ttl,
        h.sender,
        packet.receiver_label,
        packet.next_node_label,
        body,
        packet.payload_len
    )
}
