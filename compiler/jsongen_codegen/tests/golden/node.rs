// Code generated by jsongen. DO NOT EDIT.

#[allow(unused_mut, unused_assignments, unused_variables, clippy::all, clippy::pedantic)]
pub fn encode_node(out: &mut ::jsongen_rt::Writer, v: &crate::tree::Node) {
    out.raw_byte(b'{');
    out.raw_string("\"value\":");
    out.int64(v.value);
    if v.next.is_some() {
        out.raw_string(",\"next\":");
        if let Some(p0) = &v.next {
            encode_node(out, &**p0);
        } else {
            out.raw_string("null");
        }
    }
    out.raw_string(",\"children\":");
    out.raw_byte(b'[');
    for (i1, v1) in v.children.iter().enumerate() {
        if i1 > 0 {
            out.raw_byte(b',');
        }
        encode_node(out, v1);
    }
    out.raw_byte(b']');
    out.raw_byte(b'}');
}

impl ::jsongen_rt::Marshaler for crate::tree::Node {
    fn marshal_json(&self, out: &mut ::jsongen_rt::Writer) {
        encode_node(out, self);
    }
}

impl ::jsongen_rt::RawMarshaler for crate::tree::Node {
    fn marshal_json_raw(&self) -> ::core::result::Result<::std::vec::Vec<u8>, ::jsongen_rt::Error> {
        let mut out = ::jsongen_rt::Writer::new();
        encode_node(&mut out, self);
        out.build_bytes()
    }
}
