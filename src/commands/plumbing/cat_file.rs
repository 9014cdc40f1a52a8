use crate::areas::database::DecodedObject;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Print the header and decoded content of a single loose object
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;
        let object = self.database().decode_object(&oid)?;
        let mut writer = self.writer();

        match object {
            DecodedObject::Commit(header, commit) => {
                writeln!(writer, "{} {}", header.kind, header.size)?;
                writeln!(writer, "{}", commit)?;
            }
            DecodedObject::Other(header, payload) => {
                writeln!(writer, "{} {}", header.kind, header.size)?;
                writer.write_all(&payload)?;
            }
        }

        Ok(())
    }
}
