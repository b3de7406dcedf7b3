/// Filesystem adapters for file I/O operations
mod list_writer;
mod nmap_xml_reader;

pub use list_writer::FileSystemListWriter;
pub use nmap_xml_reader::{parse_nmap_xml, NmapXmlReader};
