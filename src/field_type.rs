/// Field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Free text, kept as read after trimming
    Text,
    /// Non negative counter. Blank, sentinel or negative cells become 0
    Integer,
    /// 64 bit floating point number. Blank, sentinel or non finite cells become 0.0
    Number,
}
