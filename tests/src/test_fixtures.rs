//! Published test data
//!
//! Test sets from the ETSI/SAGE "Specification of the 3GPP Confidentiality
//! and Integrity Algorithms UEA2 & UIA2", Document 3 (Implementors' Test
//! Data) and Document 1 (SNOW 3G), plus the 128-EIA1 set from TS 33.401.
//! Hex is kept in the grouped layout of the source documents.

use snow3g_common::Direction;

/// A SNOW 3G keystream test set.
#[derive(Debug, Clone, Copy)]
pub struct Snow3gTestSet {
    pub name: &'static str,
    pub key: &'static str,
    pub iv: &'static str,
    /// `[R1, R2, R3]` after the 32 initialization clocks, when published
    pub fsm_after_init: Option<[u32; 3]>,
    /// Number of keystream words the set covers
    pub words: usize,
    /// `(index, word)` pairs of the published keystream
    pub keystream: &'static [(usize, u32)],
}

/// A UEA2 (f8) test set.
#[derive(Debug, Clone, Copy)]
pub struct Uea2TestSet {
    pub name: &'static str,
    pub ck: &'static str,
    pub count: u32,
    pub bearer: u32,
    pub direction: Direction,
    pub bit_length: u32,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// A UIA2 (f9) test set.
#[derive(Debug, Clone, Copy)]
pub struct Uia2TestSet {
    pub name: &'static str,
    pub ik: &'static str,
    pub count: u32,
    pub fresh: u32,
    pub direction: Direction,
    pub bit_length: u64,
    pub message: &'static str,
    pub mac: &'static str,
}

pub const SNOW3G_TEST_SETS: &[Snow3gTestSet] = &[
    Snow3gTestSet {
        name: "Test Set 1",
        key: "2B D6 45 9F 82 C5 B3 00 95 2C 49 10 48 81 FF 48",
        iv: "EA 02 47 14 AD 5C 4D 84 DF 1F 9B 25 1C 0B F4 5F",
        fsm_after_init: Some([0x61DA9249, 0x427DF38C, 0x0FB6B101]),
        words: 2,
        keystream: &[(0, 0xABEE9704), (1, 0x7AC31373)],
    },
    Snow3gTestSet {
        name: "Test Set 2",
        key: "8C E3 3E 2C C3 C0 B5 FC 1F 3D E8 A6 DC 66 B1 F3",
        iv: "D3 C5 D5 92 32 7F B1 1C DE 55 19 88 CE B2 F9 B7",
        fsm_after_init: Some([0x65130120, 0xA14C7DBD, 0xB68B551A]),
        words: 2,
        keystream: &[(0, 0xEFF8A342), (1, 0xF751480F)],
    },
    Snow3gTestSet {
        name: "Test Set 3",
        key: "40 35 C6 68 0A F8 C6 D1 A8 FF 86 67 B1 71 40 13",
        iv: "62 A5 40 98 1B A6 F9 B7 45 92 B0 E7 86 90 F7 1B",
        fsm_after_init: Some([0x6599AA50, 0x5EA9188B, 0xF41889FC]),
        words: 2,
        keystream: &[(0, 0xA8C874A9), (1, 0x7AE7C4F8)],
    },
    Snow3gTestSet {
        name: "Test Set 4",
        key: "0D ED 72 63 10 9C F9 2E 33 52 25 5A 14 0E 0F 76",
        iv: "6B 68 07 9A 41 A7 C4 C9 1B EF D7 9F 7F DC C2 33",
        fsm_after_init: None,
        words: 2500,
        keystream: &[(0, 0xD712C05C), (1, 0xA937C2A6), (2, 0xEB7EAAE3), (2499, 0x9C0DB3AA)],
    },
];

pub const UEA2_TEST_SETS: &[Uea2TestSet] = &[
    Uea2TestSet {
        name: "Test Set 1",
        ck: "2B D6 45 9F 82 C5 B3 00 95 2C 49 10 48 81 FF 48",
        count: 0x72A4F20F,
        bearer: 0x0C,
        direction: Direction::Downlink,
        bit_length: 798,
        plaintext: "7EC61272 743BF161 4726446A 6C38CED1
                    66F6CA76 EB543004 4286346C EF130F92
                    922B0345 0D3A9975 E5BD2EA0 EB55AD8E
                    1B199E3E C4316020 E9A1B285 E7627953
                    59B7BDFD 39BEF4B2 484583D5 AFE082AE
                    E638BF5F D5A60619 3901A08F 4AB41AAB
                    9B134880",
        ciphertext: "8CEBA629 43DCED3A 0990B06E A1B0A2C4
                     FB3CEDC7 1B369F42 BA64C1EB 6665E72A
                     A1C9BB0D EAA20FE8 6058B8BA EE2C2E7F
                     0BECCE48 B52932A5 3C9D5F93 1A3A7C53
                     2259AF43 25E2A65E 3084AD5F 6A513B7B
                     DDC1B65F 0AA0D97A 053DB55A 88C4C4F9
                     605E4140",
    },
    Uea2TestSet {
        name: "Test Set 2",
        ck: "EF A8 B2 22 9E 72 0C 2A 7C 36 EA 55 E9 60 56 95",
        count: 0xE28BCF7B,
        bearer: 0x18,
        direction: Direction::Uplink,
        bit_length: 510,
        plaintext: "10111231 E060253A 43FD3F57 E37607AB
                    2827B599 B6B1BBDA 37A8ABCC 5A8C550D
                    1BFB2F49 4624FB50 367FA36C E3BC68F1
                    1CF93B15 10376B02 130F812A 9FA169D8",
        ciphertext: "E0DA15CA 8E2554F5 E56C9468 DC6C7C12
                     9C568AA5 032317E0 4E072964 6CABEFA6
                     89864C41 0F24F919 E61E3DFD FAD77E56
                     0DB0A9CD 36C34AE4 181490B2 9F5FA2FC",
    },
    Uea2TestSet {
        name: "Test Set 3",
        ck: "5A CB 1D 64 4C 0D 51 20 4E A5 F1 45 10 10 D8 52",
        count: 0xFA556B26,
        bearer: 0x03,
        direction: Direction::Downlink,
        bit_length: 120,
        plaintext: "AD9C441F 890B38C4 57A49D42 1407E8",
        ciphertext: "BA0F3130 0334C56B 52A7497C BAC046",
    },
    Uea2TestSet {
        name: "Test Set 4",
        ck: "D3 C5 D5 92 32 7F B1 1C 40 35 C6 68 0A F8 C6 D1",
        count: 0x398A59B4,
        bearer: 0x05,
        direction: Direction::Downlink,
        bit_length: 253,
        plaintext: "981BA682 4C1BFB1A B4854720 29B71D80
                    8CE33E2C C3C0B5FC 1F3DE8A6 DC66B1F0",
        ciphertext: "989B719C DC33CEB7 CF276A52 827CEF94
                     A56C40C0 AB9D81F7 A2A9BAC6 0E11C4B0",
    },
    Uea2TestSet {
        name: "Test Set 5",
        ck: "60 90 EA E0 4C 83 70 6E EC BF 65 2B E8 E3 65 66",
        count: 0x72A4F20F,
        bearer: 0x09,
        direction: Direction::Uplink,
        bit_length: 837,
        plaintext: "40981BA6 824C1BFB 4286B299 783DAF44
                    2C099F7A B0F58D5C 8E46B104 F08F01B4
                    1AB48547 2029B71D 36BD1A3D 90DC3A41
                    B46D5167 2AC4C966 3A2BE063 DA4BC8D2
                    808CE33E 2CCCBFC6 34E1B259 060876A0
                    FBB5A437 EBCC8D31 C19E4454 318745E3
                    98764598 7A986F2C B0",
        ciphertext: "5892BBA8 8BBBCAAE AE769AA0 6B683D3A
                     17CC04A3 69881697 435E44FE D5FF9AF5
                     7B9E890D 4D5C6470 9885D48A E40690EC
                     043BAAE9 705796E4 A9FF5A4B 8D8B36D7
                     F3FE57CC 6CFD6CD0 05CD3852 A85E94CE
                     6BCD90D0 D07839CE 09733544 CA8E3508
                     43248550 922AC128 18",
    },
];

const UIA2_IK: &str = "2B D6 45 9F 82 C5 B3 00 95 2C 49 10 48 81 FF 48";
const UIA2_MESSAGE: &str = "6B227737 296F393C 8079353E DC87E2E8 05D2EC49 A4F2D8E0";

pub const UIA2_TEST_SETS: &[Uia2TestSet] = &[
    Uia2TestSet {
        name: "Test Set 1",
        ik: UIA2_IK,
        count: 0x38A6F056,
        fresh: 0x05D2EC49,
        direction: Direction::Uplink,
        bit_length: 189,
        message: UIA2_MESSAGE,
        mac: "2BCE1820",
    },
    Uia2TestSet {
        name: "Test Set 1, downlink",
        ik: UIA2_IK,
        count: 0x38A6F056,
        fresh: 0x05D2EC49,
        direction: Direction::Downlink,
        bit_length: 189,
        message: UIA2_MESSAGE,
        mac: "2F403C4E",
    },
    Uia2TestSet {
        name: "Test Set 1, downlink, one block",
        ik: UIA2_IK,
        count: 0x38A6F056,
        fresh: 0x05D2EC49,
        direction: Direction::Downlink,
        bit_length: 64,
        message: UIA2_MESSAGE,
        mac: "343F9890",
    },
    Uia2TestSet {
        name: "Test Set 1, downlink, empty",
        ik: UIA2_IK,
        count: 0x38A6F056,
        fresh: 0x05D2EC49,
        direction: Direction::Downlink,
        bit_length: 0,
        message: "",
        mac: "DCD6ABC9",
    },
    Uia2TestSet {
        name: "128-EIA1 Test Set 1",
        ik: UIA2_IK,
        count: 0x38A6F056,
        fresh: 0x1F << 27,
        direction: Direction::Uplink,
        bit_length: 88,
        message: "33323462 63393861 373479",
        mac: "731F1165",
    },
];
