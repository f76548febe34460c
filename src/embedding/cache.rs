use crate::CACHE_EXTENSION;
use crate::CACHE_MAGIC;
use crate::Error;
use crate::Result;
use crate::Table;
use crate::Vocabulary;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// On-disk embedding table produced by the external encoder.
///
/// Layout, all big-endian:
///
/// | bytes        | content                              |
/// |--------------|--------------------------------------|
/// | 8            | [`CACHE_MAGIC`]                      |
/// | 8            | rows (`u64`), the vocabulary size    |
/// | 4            | columns (`u32`), the dimension       |
/// | 4 × rows × d | `f32` components, row-major          |
///
/// Rows appear in vocabulary index order. Writing then reading reproduces
/// the matrix bit for bit.
pub struct Cache;

impl Cache {
    /// `<dir>/<model>.embeddings`, with path separators in the model name
    /// flattened so that hub-style names like `org/model` stay one file.
    pub fn path(dir: &Path, model: &str) -> PathBuf {
        dir.join(format!("{}.{}", model.replace(['/', '\\'], "_"), CACHE_EXTENSION))
    }

    /// check if file exists on disk
    pub fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    /// Loads the cache if present. Producing it is the encoder's job, so a
    /// missing file is reported rather than regenerated.
    pub fn create_or_load(path: &Path, vocabulary: Vocabulary, dimension: usize) -> Result<Table> {
        if Self::done(path) {
            Self::load(path, vocabulary, dimension)
        } else {
            log::warn!("{:<32}{:<32}", "missing embedding cache", path.display());
            Err(Error::MissingCache(path.to_path_buf()))
        }
    }

    pub fn load(path: &Path, vocabulary: Vocabulary, dimension: usize) -> Result<Table> {
        log::info!("{:<32}{:<32}", "loading embeddings", path.display());
        let ref mut reader = BufReader::new(File::open(path)?);
        let table = Self::read(reader, vocabulary, dimension)?;
        log::info!("{:<32}{:<32}", "loaded embeddings", format!("{} x {}", table.len(), table.dimension()));
        Ok(table)
    }

    pub fn save(table: &Table, path: &Path) -> Result<()> {
        log::info!("{:<32}{:<32}", "saving embeddings", path.display());
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let ref mut writer = BufWriter::new(File::create(path)?);
        Self::write(table, writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads only the header, for inspection without a vocabulary.
    pub fn shape(path: &Path) -> Result<(usize, usize)> {
        let ref mut reader = BufReader::new(File::open(path)?);
        Self::header(reader)
    }

    pub fn write<W: Write>(table: &Table, writer: &mut W) -> Result<()> {
        writer.write_all(CACHE_MAGIC)?;
        writer.write_u64::<BE>(table.len() as u64)?;
        writer.write_u32::<BE>(table.dimension() as u32)?;
        for x in table.matrix() {
            writer.write_f32::<BE>(*x)?;
        }
        Ok(())
    }

    /// Shape is checked against what the caller expects before the body is
    /// read; nothing is truncated or padded to fit.
    pub fn read<R: Read>(reader: &mut R, vocabulary: Vocabulary, dimension: usize) -> Result<Table> {
        let (rows, cols) = Self::header(reader)?;
        if rows != vocabulary.len() {
            return Err(Error::CorruptCache(format!(
                "{} rows on disk, vocabulary holds {} words",
                rows,
                vocabulary.len()
            )));
        }
        if cols != dimension {
            return Err(Error::CorruptCache(format!(
                "{} columns on disk, expected dimension {}",
                cols, dimension
            )));
        }
        let mut matrix = vec![0f32; rows * cols];
        reader.read_f32_into::<BE>(&mut matrix).map_err(truncated)?;
        if reader.read(&mut [0u8; 1])? != 0 {
            return Err(Error::CorruptCache("trailing bytes after matrix".into()));
        }
        Table::new(vocabulary, dimension, matrix)
    }

    fn header<R: Read>(reader: &mut R) -> Result<(usize, usize)> {
        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic).map_err(truncated)?;
        if &magic != CACHE_MAGIC {
            return Err(Error::CorruptCache("bad magic bytes".into()));
        }
        let rows = reader.read_u64::<BE>().map_err(truncated)? as usize;
        let cols = reader.read_u32::<BE>().map_err(truncated)? as usize;
        Ok((rows, cols))
    }
}

fn truncated(e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::CorruptCache("truncated file".into()),
        _ => Error::Io(e),
    }
}
