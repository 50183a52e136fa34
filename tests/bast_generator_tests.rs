use dokumen_mitra::doc::{Block, Highlight};
use dokumen_mitra::generators::{
    BastGenerator, BastRequest, Generator, GeneratorError, MitraInfo, VolumeSatuan,
};

fn contoh_request() -> BastRequest {
    BastRequest {
        nomor: "BAST-07/2025".to_string(),
        kegiatan: "Survei Sosial Ekonomi".to_string(),
        bulan: 10,
        tahun: 2025,
        mitra: MitraInfo {
            nama: "Budi Santoso".to_string(),
            alamat: "Jl. Melati No. 5".to_string(),
            pekerjaan: "Mitra Statistik".to_string(),
        },
        ketua_tim: "Dewi Lestari".to_string(),
        tanggal_bast: "31/10/2025".to_string(),
        nomor_sk: "SK-12/2025".to_string(),
        tanggal_sk: "01/10/2025".to_string(),
        volume: vec![VolumeSatuan {
            satuan: "dokumen".to_string(),
            total: 32,
        }],
    }
}

#[test]
fn test_volume_sentence_single_unit() {
    let hasil = BastGenerator::new().generate(contoh_request()).unwrap();
    assert!(hasil
        .document
        .plain_text()
        .contains("32 dokumen Survei Sosial Ekonomi"));
}

#[test]
fn test_volume_sentence_multiple_units() {
    let mut request = contoh_request();
    request.volume = vec![
        VolumeSatuan {
            satuan: "dokumen".to_string(),
            total: 10,
        },
        VolumeSatuan {
            satuan: "OK".to_string(),
            total: 5,
        },
    ];
    let hasil = BastGenerator::new().generate(request).unwrap();
    assert!(hasil
        .document
        .plain_text()
        .contains("10 dokumen, 5 OK Survei Sosial Ekonomi"));
}

#[test]
fn test_volume_sentence_empty_defaults() {
    let mut request = contoh_request();
    request.volume.clear();
    let hasil = BastGenerator::new().generate(request).unwrap();
    assert!(hasil
        .document
        .plain_text()
        .contains("0 dokumen Survei Sosial Ekonomi"));
}

#[test]
fn test_opening_sentence_spells_out_date() {
    let hasil = BastGenerator::new().generate(contoh_request()).unwrap();
    let teks = hasil.document.plain_text();
    assert!(teks.contains(
        "Pada hari ini Jumat, tanggal tiga puluh satu, bulan Oktober, tahun dua ribu dua puluh lima"
    ));
}

#[test]
fn test_red_highlighted_number_and_rule_row() {
    let hasil = BastGenerator::new().generate(contoh_request()).unwrap();
    let section = &hasil.document.sections[0];

    let disorot = section.blocks.iter().any(|b| match b {
        Block::Paragraph(p) => p.runs.iter().any(|r| r.highlight == Some(Highlight::Red)),
        _ => false,
    });
    assert!(disorot);

    let garis = section.blocks.iter().any(|b| match b {
        Block::Table(t) => t.borders && t.rows.iter().any(|r| r.height_mm == Some(0)),
        _ => false,
    });
    assert!(garis);
}

#[test]
fn test_idempotent_generation() {
    let a = BastGenerator::new().generate(contoh_request()).unwrap();
    let b = BastGenerator::new().generate(contoh_request()).unwrap();
    assert_eq!(a.document, b.document);
}

#[test]
fn test_invalid_sk_date_rejected() {
    let mut request = contoh_request();
    request.tanggal_sk = "kemarin".to_string();
    let err = BastGenerator::new().generate(request).unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(_)));
}

#[test]
fn test_request_deserialization() {
    let json = r#"{
        "nomor": "BAST-01/2025",
        "kegiatan": "Survei Harga",
        "bulan": 2,
        "tahun": 2024,
        "mitra": {"nama": "Siti", "alamat": "Jl. Mawar 2", "pekerjaan": "Mitra"},
        "ketua_tim": "Andi",
        "tanggal_bast": "29/02/2024",
        "nomor_sk": "SK-01/2024",
        "tanggal_sk": "01/02/2024",
        "volume": [{"satuan": "dokumen", "total": 12}]
    }"#;

    let request: BastRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.volume.len(), 1);
    assert_eq!(request.volume[0].total, 12);
    assert!(BastGenerator::new().generate(request).is_ok());
}
