use csv::{ReaderBuilder, StringRecord};
use read_data::Trusted;

fn read(path: &str) -> Vec<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();

    reader.records().map(|r| r.unwrap()).collect()
}

fn unhex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn decode_integers() {
    for record in read("fixtures/integers.csv") {
        let data = unhex(&record[0]);
        let b = Trusted(&data);

        let Ok(int8) = read_data::int8(&b, 0);
        let Ok(uint8) = read_data::uint8(&b, 0);
        let Ok(int16) = read_data::int16(&b, 0);
        let Ok(uint16) = read_data::uint16(&b, 0);
        let Ok(int32) = read_data::int32(&b, 0);
        let Ok(uint32) = read_data::uint32(&b, 0);

        assert_eq!(int8.to_string(), &record[1], "int8 of {}", &record[0]);
        assert_eq!(uint8.to_string(), &record[2], "uint8 of {}", &record[0]);
        assert_eq!(int16.to_string(), &record[3], "int16 of {}", &record[0]);
        assert_eq!(uint16.to_string(), &record[4], "uint16 of {}", &record[0]);
        assert_eq!(int32.to_string(), &record[5], "int32 of {}", &record[0]);
        assert_eq!(uint32.to_string(), &record[6], "uint32 of {}", &record[0]);
    }
}

#[test]
fn decode_integers_at_offset() {
    for record in read("fixtures/integers.csv") {
        let mut data = vec![0xaa; 3];
        data.extend(unhex(&record[0]));

        assert_eq!(read_data::int32(&data, 3).unwrap().to_string(), &record[5]);
        assert_eq!(read_data::uint32(&data, 3).unwrap().to_string(), &record[6]);
    }
}

#[test]
fn decode_floats() {
    for record in read("fixtures/floats.csv") {
        let data = unhex(&record[1]);

        match &record[0] {
            "32" => {
                let expected: f32 = record[2].parse().unwrap();
                let value = read_data::float32_at(data.as_slice(), 0).unwrap();
                assert_eq!(value.to_bits(), expected.to_bits(), "float32 of {}", &record[1]);
            }
            "64" => {
                let expected: f64 = record[2].parse().unwrap();
                let value = read_data::float64_at(data.as_slice(), 0).unwrap();
                assert_eq!(value.to_bits(), expected.to_bits(), "float64 of {}", &record[1]);
            }
            width => panic!("Unknown float width {width}."),
        }
    }
}
