use setb::{Error, Record, SectorType, Set};

/// Little-endian byte builder for synthetic set files.
#[derive(Default)]
struct Builder {
    buf: Vec<u8>,
}

impl Builder {
    fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    fn f32(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    fn vec3(&mut self, v: [f32; 3]) -> &mut Self {
        self.f32(v[0]).f32(v[1]).f32(v[2])
    }

    fn padded(&mut self, s: &str, stride: usize) -> &mut Self {
        self.bytes(s.as_bytes());
        self.buf.resize(self.buf.len() + stride - s.len(), 0);
        self
    }

    fn setup(&mut self, name: &str, tile: &str) -> &mut Self {
        self.padded(name, 128)
            .i32(0x0bad)
            .bytes(tile.as_bytes())
            .u8(0)
            .vec3([0.5, 1.75, -4.0])
            .vec3([0.0, 1.0, 0.0])
            .f32(0.0)
            .f32(60.0)
            .f32(0.1)
            .f32(1000.0)
    }

    #[allow(clippy::too_many_arguments)]
    fn sector(
        &mut self,
        name: &str,
        id: i32,
        visible: bool,
        tag: i32,
        height: f32,
        vertices: &[[f32; 3]],
        trailer_words: i32,
    ) -> &mut Self {
        self.i32(vertices.len() as i32);
        for v in vertices {
            self.vec3(*v);
        }
        let stride = name.len() + 4;
        self.i32(stride as i32)
            .padded(name, stride)
            .i32(id)
            .u8(visible as u8)
            .i32(tag)
            .i32(trailer_words);
        for _ in 0..trailer_words {
            self.i32(-1);
        }
        self.f32(height)
    }

    fn build(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

fn funnel_set() -> Vec<u8> {
    Builder::default()
        .i32(0)
        .i32(0)
        .i32(1)
        .sector("entry_funnel", 7, true, SectorType::FUNNEL_TAG, 2.5, &TRIANGLE, 0)
        .build()
}

#[test]
fn funnel_sector_report() {
    let set = Set::parse(&funnel_set()).expect("decode");
    let expected = "section: colormaps\n\
                    section: setups\n\
                    \tnumsetups 0\n\
                    section: lights\n\
                    \tnumlights 0\n\
                    section: sectors\n\
                    \tsector\tentry_funnel\n\
                    \tID\t7\n\
                    \ttype\tfunnel\n\
                    \tdefault visibility\tvisible\n\
                    \theight\t2.500000\n\
                    \tnumvertices\t3\n\
                    \tnormal\t\t\t0.000000\t0.000000\t1.000000\n\
                    \tvertices:\t\t0.000000\t0.000000\t0.000000\n\
                    \t\t\t\t1.000000\t0.000000\t0.000000\n\
                    \t\t\t\t0.000000\t1.000000\t0.000000\n\
                    \n\n";
    assert_eq!(set.to_string(), expected);
}

#[test]
fn report_is_deterministic() {
    let data = Builder::default()
        .i32(2)
        .setup("wide", "wide.til")
        .setup("close", "")
        .i32(2)
        .bytes(&[0x11; 100])
        .bytes(&[0x22; 100])
        .i32(2)
        .sector("walk_a", 1, true, SectorType::WALK_TAG, 0.0, &TRIANGLE, 2)
        .sector("cam_b", 2, false, SectorType::CAMERA_TAG, 1.0, &TRIANGLE, 0)
        .build();

    let first = Set::parse(&data).unwrap().to_string();
    let second = Set::parse(&data.clone()).unwrap().to_string();
    assert_eq!(first, second);
}

#[test]
fn setups_and_lights_in_report() {
    let data = Builder::default()
        .i32(1)
        .setup("overview", "ov.til")
        .i32(1)
        .bytes(&[0u8; 100])
        .i32(0)
        .build();

    let report = Set::parse(&data).unwrap().to_string();
    let expected = "section: colormaps\n\
                    section: setups\n\
                    \tnumsetups 1\n\
                    \tname\toverview\n\
                    \tposition\t0.500000\t1.750000\t-4.000000\n\
                    \tinterest\t0.000000\t1.000000\t0.000000\n\
                    \troll\t0.000000\n\
                    \tfov\t60.000000\n\
                    \tnclip\t0.100000\n\
                    \tfclip\t1000.000000\n\
                    \n\n\
                    section: lights\n\
                    \tnumlights 0\n\
                    \n\n\
                    section: sectors\n";
    assert_eq!(report, expected);
}

#[test]
fn records_render_like_the_report() {
    let set = Set::parse(&funnel_set()).unwrap();
    let records: Vec<Record<'_>> = set.records().collect();
    assert_eq!(records.len(), 1);
    let report = set.to_string();
    assert!(report.contains(&records[0].to_string()));
}

#[test]
fn trailer_keeps_following_sector_aligned() {
    let data = Builder::default()
        .i32(0)
        .i32(0)
        .i32(2)
        .sector("first", 1, true, SectorType::WALK_TAG, 0.0, &TRIANGLE, 5)
        .sector("second", 2, true, SectorType::SPECIAL_TAG, 3.0, &TRIANGLE, 0)
        .build();

    let set = Set::parse(&data).unwrap();
    let second = &set.sectors()[1];
    assert_eq!(second.name, "second");
    assert_eq!(second.id, 2);
    assert_eq!(second.kind, Some(SectorType::Special));
    assert_eq!(second.height, 3.0);
    assert!(set.diagnostics().is_empty());
}

#[test]
fn truncated_sector_fails() {
    let mut data = funnel_set();
    // Cut inside the vertex array: 12 header bytes + vertex count + one vertex.
    data.truncate(12 + 4 + 12);
    let err = Set::parse(&data).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput { .. }), "{err}");
}

#[test]
fn every_truncation_point_fails_cleanly() {
    let data = funnel_set();
    for len in 0..data.len() {
        let result = Set::parse(&data[..len]);
        assert!(
            matches!(
                result,
                Err(Error::TruncatedInput { .. } | Error::UnterminatedString { .. })
            ),
            "length {len}: {result:?}"
        );
    }
}
