// Code generated by jsongen. DO NOT EDIT.

#[allow(unused_mut, unused_assignments, unused_variables, clippy::all, clippy::pedantic)]
pub fn encode_basic(out: &mut ::jsongen_rt::Writer, v: &crate::Basic) {
    out.raw_byte(b'{');
    out.raw_string("\"n\":");
    out.string(&v.name);
    if v.count != 0 {
        out.raw_string(",\"c\":");
        out.int32(v.count);
    }
    out.raw_byte(b'}');
}

impl ::jsongen_rt::Marshaler for crate::Basic {
    fn marshal_json(&self, out: &mut ::jsongen_rt::Writer) {
        encode_basic(out, self);
    }
}

impl ::jsongen_rt::RawMarshaler for crate::Basic {
    fn marshal_json_raw(&self) -> ::core::result::Result<::std::vec::Vec<u8>, ::jsongen_rt::Error> {
        let mut out = ::jsongen_rt::Writer::new();
        encode_basic(&mut out, self);
        out.build_bytes()
    }
}
