//! Known-answer vectors

/// SM3 input/digest pairs (digest as lowercase hex)
pub struct Sm3Vector {
    /// Message bytes
    pub message: &'static [u8],
    /// Expected digest
    pub digest: &'static str,
}

/// Published SM3 examples plus the empty message
pub const SM3_VECTORS: &[Sm3Vector] = &[
    Sm3Vector {
        message: b"",
        digest: "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b",
    },
    Sm3Vector {
        message: b"abc",
        digest: "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0",
    },
    Sm3Vector {
        message: b"abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd",
        digest: "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732",
    },
];

/// The recommended curve's base point as `x ‖ y` hex
pub const SM2_BASE_POINT_HEX: &str = concat!(
    "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7",
    "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0"
);

/// One worked example of SM2 signing and encryption (all hex lowercase)
///
/// Both operations use the same nonce `k`, so a replaying RNG reproduces
/// the expected signature and ciphertext exactly.
pub struct Sm2Vector {
    /// Private scalar d
    pub private_key: &'static str,
    /// Public key Q = d·G as `x ‖ y`
    pub public_key: &'static str,
    /// Z value for the default identifier
    pub z: &'static str,
    /// Per-operation nonce
    pub k: &'static str,
    /// Signed message
    pub message: &'static [u8],
    /// Signature `r ‖ s`
    pub signature: &'static str,
    /// Encrypted message
    pub plaintext: &'static [u8],
    /// Ciphertext `C1 ‖ C3 ‖ C2`
    pub ciphertext: &'static str,
}

/// GM/T 0003.5 example over the recommended curve
pub const SM2_STANDARD_EXAMPLE: Sm2Vector = Sm2Vector {
    private_key: "3945208f7b2144b13f36e38ac6d39f95889393692860b51a42fb81ef4df7c5b8",
    public_key: concat!(
        "09f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020",
        "ccea490ce26775a52dc6ea718cc1aa600aed05fbf35e084a6632f6072da9ad13"
    ),
    z: "b2e14c5c79c6df5b85f4fe7ed8db7a262b9da7e07ccb0ea9f4747b8ccda8a4f3",
    k: "59276e27d506861a16680f3ad9c02dccef3cc1fa3cdbe4ce6d54b80deac1bc21",
    message: b"message digest",
    signature: concat!(
        "f5a03b0648d2c4630eeac513e1bb81a15944da3827d5b74143ac7eaceee720b3",
        "b1b6aa29df212fd8763182bc0d421ca1bb9038fd1f7f42d4840b69c485bbc1aa"
    ),
    plaintext: b"encryption standard",
    ciphertext: concat!(
        "04ebfc718e8d1798620432268e77feb6415e2ede0e073c0f4f640ecd2e149a73",
        "e858f9d81e5430a57b36daab8f950a3c64e6ee6a63094d99283aff767e124df0",
        "59983c18f809e262923c53aec295d30383b54e39d609d160afcb1908d0bd8766",
        "21886ca989ca9c7d58087307ca93092d651efa"
    ),
};
