//! Ethernet II link-layer decoding.
//!
//! The parser consumes exactly the 14-byte header: destination and source
//! MAC addresses plus the big-endian ethertype. The ethertype selects the
//! next decoder; `0x0800` continues into IPv4 and anything else falls back
//! to a raw layer. Byte positions live in `layout`.
//!
//! Version française (résumé):
//! Décodage de l'en-tête Ethernet II (14 octets) : MAC destination/source
//! et ethertype grand-boutiste. L'ethertype choisit le décodeur suivant ;
//! les positions d'octets sont dans `layout`.

pub mod layout;
pub mod mac;
pub mod parser;

pub use mac::MacAddr;
pub use parser::{EthernetLayer, parse_ethernet};
