// Code generated by jsongen. DO NOT EDIT.

#[allow(unused_mut, unused_assignments, unused_variables, clippy::all, clippy::pedantic)]
pub fn encode_sparse(out: &mut ::jsongen_rt::Writer, v: &crate::Sparse) {
    out.raw_byte(b'{');
    let mut first = true;
    if !v.a.is_empty() {
        first = false;
        out.raw_string("\"a\":");
        out.string(&v.a);
    }
    if !v.b.is_empty() {
        if first {
            first = false;
        } else {
            out.raw_byte(b',');
        }
        out.raw_string("\"b\":");
        out.raw_byte(b'[');
        for (i0, v0) in v.b.iter().enumerate() {
            if i0 > 0 {
                out.raw_byte(b',');
            }
            out.uint8(*v0);
        }
        out.raw_byte(b']');
    }
    if first {
        first = false;
    } else {
        out.raw_byte(b',');
    }
    out.raw_string("\"tags\":");
    out.raw_byte(b'{');
    let mut m1_first = true;
    for (m1_name, m1_value) in &v.tags {
        if !m1_first {
            out.raw_byte(b',');
        }
        m1_first = false;
        out.string(m1_name);
        out.raw_byte(b':');
        out.string(m1_value);
    }
    out.raw_byte(b'}');
    if v.flag {
        out.raw_string(",\"flag\":");
        out.bool(v.flag);
    }
    out.raw_byte(b'}');
}

impl ::jsongen_rt::Marshaler for crate::Sparse {
    fn marshal_json(&self, out: &mut ::jsongen_rt::Writer) {
        encode_sparse(out, self);
    }
}

impl ::jsongen_rt::RawMarshaler for crate::Sparse {
    fn marshal_json_raw(&self) -> ::core::result::Result<::std::vec::Vec<u8>, ::jsongen_rt::Error> {
        let mut out = ::jsongen_rt::Writer::new();
        encode_sparse(&mut out, self);
        out.build_bytes()
    }
}
