//! Golden test vectors.
//!
//! Every vector here was produced by the full node or the reference wallet.
//! Matching them byte for byte is what makes proofs built by this crate
//! acceptable on the network.

use avaproof::{
    BinaryCodec, Delegation, DelegationBuilder, LimitedProofId, OutPoint, PayoutScript,
    PrivateKey, Proof, ProofBuilder, ProofValidationError, PublicKey, Signer, Stake, TxId,
};

/// One UTXO of a golden proof.
#[derive(Debug, Clone)]
pub struct StakeVector {
    pub txid: &'static str,
    pub vout: u32,
    pub amount: i64,
    pub height: u32,
    pub is_coinbase: bool,
    /// Raw secret of the stake key.
    pub secret: &'static str,
    pub compressed: bool,
}

/// A proof built from known keys and UTXOs.
#[derive(Debug, Clone)]
pub struct ProofVector {
    pub name: &'static str,
    pub master_secret: &'static str,
    pub sequence: u64,
    pub expiration_time: i64,
    pub payout_hex: &'static str,
    pub stakes: &'static [StakeVector],
    pub expected_hex: &'static str,
    pub expected_limited_id: &'static str,
    pub expected_proof_id: &'static str,
}

/// A delegation built by chaining known keys.
#[derive(Debug, Clone)]
pub struct DelegationVector {
    pub name: &'static str,
    pub limited_id: &'static str,
    pub master_secret: &'static str,
    /// Public keys delegated to, in order. The delegator of each level is the
    /// previous level's key, starting at the master key.
    pub delegated: &'static [&'static str],
    /// Secrets of every delegator, starting with the master secret.
    pub delegator_secrets: &'static [&'static str],
    pub expected_hex: &'static str,
    pub expected_id: &'static str,
}

/// Expected validation outcome of a [`RegularFormatVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    NoStake,
    DustThreshold,
    DuplicateStake,
    InvalidPayoutScript,
    InvalidProofSignature,
    InvalidStakeSignature,
    WrongStakeOrdering,
    TooManyStakes,
    Expired,
}

impl Outcome {
    pub fn of(result: &Result<(), ProofValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(ProofValidationError::NoStake) => Self::NoStake,
            Err(ProofValidationError::TooManyStakes { .. }) => Self::TooManyStakes,
            Err(ProofValidationError::InvalidPayoutScript) => Self::InvalidPayoutScript,
            Err(ProofValidationError::InvalidProofSignature) => Self::InvalidProofSignature,
            Err(ProofValidationError::DustThreshold { .. }) => Self::DustThreshold,
            Err(ProofValidationError::WrongStakeOrdering { .. }) => Self::WrongStakeOrdering,
            Err(ProofValidationError::DuplicateStake { .. }) => Self::DuplicateStake,
            Err(ProofValidationError::InvalidStakeSignature { .. }) => Self::InvalidStakeSignature,
            Err(ProofValidationError::Expired { .. }) => Self::Expired,
        }
    }
}

/// A serialized proof from the node's test suite with its expected id,
/// score and validation outcome.
#[derive(Debug, Clone)]
pub struct RegularFormatVector {
    pub name: &'static str,
    pub proof_hex: &'static str,
    pub proof_id: &'static str,
    pub score: u32,
    pub outcome: Outcome,
}

/// Dust threshold the regular format vectors were validated with.
pub const REGULAR_FORMAT_DUST_THRESHOLD: i64 = 100_000_000;

const MASTER_SECRET: &str = "12b004fff7f4b69ef8650e767f18f11ede158148b425660723b9f9a66e61f747";
const MASTER2_SECRET: &str = "d31e78a596830a967458f5d8c5117842af0366a1484b5c84bd521b2d61a6915a";
const STAKE2_SECRET: &str = "47f042aed278d6efabfd7d6505905cfc610f236ab46c14921854de1d2c8a27e9";
const LEVEL1_SECRET: &str = "7077da4a47f6c85a21fe6c6cf1285c0fa06915871744ab1e5a5b741027884d00";
const LEVEL1_PUB: &str = "03e49f9df52de2dea81cf7838b82521b69f2ea360f1c4eed9e6c89b7d0f9e645ef";
const LEVEL2_PUB: &str = "03aac52f4cfca700e7e9824298e0184755112e32f359c832f5f6ad2ef62a2c024a";

/// Secret whose public key is [`LEVEL2_PUB`]; never the tip of a vector chain.
pub const WRONG_DELEGATOR_SECRET: &str =
    "03ccfe7a2eb005e4d86a045c56b46349a27fdecbf0566fdda587ef2fd6339407";

/// Single uncompressed-key stake, empty payout.
pub const ONE_STAKE_PROOF_HEX: &str = concat!(
    "2a00000000000000fff053650000000021030b4c866585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744",
    "01b7fc19792583e9cb39843fc5e22a4e3648ab1cb18a70290b341ee8d4f550ae24000000001027000000000000788814",
    "004104d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e5584",
    "2ae2bd115d1ed7cc0e82d934e929c97648cb0abd9740c85a05a7d543c3d301273d79ff7054758579e30cc05cdfe1aca3",
    "374adfe55104b409ffce4a2f19d8a5981d5f0c79b23edac73352ab2898aca89270282500788bac77505ca17d6d0dcc94",
    "6ced3990c2857c73743cd74d881fcbcbc8eaaa8d72812ebb9a556610687ca592fe907a4af024390e0a9260c4f5ea59e7",
    "ac426cc5",
);

/// Zero-level delegation: the delegated key is the master.
pub const EMPTY_DELEGATION_HEX: &str = concat!(
    "46116afa1abaab88b96c115c248b77c7d8e099565c5fb40731482c6655ca450d21",
    "023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde300",
);

/// Get all golden proof vectors.
pub fn proof_vectors() -> Vec<ProofVector> {
    vec![
        ProofVector {
            name: "one uncompressed stake, empty payout",
            master_secret: MASTER_SECRET,
            sequence: 42,
            expiration_time: 1_699_999_999,
            payout_hex: "",
            stakes: &[StakeVector {
                txid: "24ae50f5d4e81e340b29708ab11cab48364e2ae2c53f8439cbe983257919fcb7",
                vout: 0,
                amount: 10_000,
                height: 672_828,
                is_coinbase: false,
                secret: "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d",
                compressed: false,
            }],
            expected_hex: ONE_STAKE_PROOF_HEX,
            expected_limited_id: "e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864",
            expected_proof_id: "74c91491e5d6730ea1701817ed6c34e9627904fc3117647cc7d4bce73f56e45a",
        },
        ProofVector {
            name: "three coinbase stakes, P2PK payout",
            master_secret: MASTER2_SECRET,
            sequence: 5_502_932_407_561_118_921,
            expiration_time: 5_658_701_220_890_886_376,
            payout_hex: "21038439233261789dd340bdc1450172d9c671b72ee8c0b2736ed2a3a250760897fdac",
            stakes: &[
                StakeVector {
                    txid: "37424bda9a405b59e7d4f61a4c154cea5ee34e445f3daa6033b64c70355f1e0b",
                    vout: 2_322_162_807,
                    amount: 3_291_110_545,
                    height: 426_611_719,
                    is_coinbase: true,
                    secret: STAKE2_SECRET,
                    compressed: true,
                },
                StakeVector {
                    txid: "300cbba81ef40a6d269be1e931ccb58c074ace4a9b06cc0f2a2c9bf1e176ede4",
                    vout: 2_507_977_928,
                    amount: 2_866_370_216,
                    height: 1_298_955_966,
                    is_coinbase: true,
                    secret: STAKE2_SECRET,
                    compressed: true,
                },
                StakeVector {
                    txid: "2313cb59b19774df1f0b86e079ddac61c5846021324e4a36db154741868c09ac",
                    vout: 35_672_324,
                    amount: 3_993_160_086,
                    height: 484_677_071,
                    is_coinbase: true,
                    secret: STAKE2_SECRET,
                    compressed: true,
                },
            ],
            expected_hex: concat!(
                "c964aa6fde575e4ce8404581c7be874e21023beefdde700a6bc02036335b4df141c8bc67",
                "bb05a971f5ac2745fd683797dde3030b1e5f35704cb63360aa3d5f444ee35eea4c154c1a",
                "f6d4e7595b409ada4b42377764698a915c2ac4000000000f28db322102449fb5237efe8f",
                "647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce680da44b13031186044cd54f0",
                "084dcbe703bdb74058a1ddd3efffb347c04d45ced339a41eecedad05f8380a4115016404",
                "a2787f51e27165171976d1925944df0231e4ed76e1f19b2c2a0fcc069b4ace4a078cb5cc",
                "31e9e19b266d0af41ea8bb0c30c8b47c95a856d9aa000000007dfdd89a2102449fb5237e",
                "fe8f647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce68019201c99059772f645",
                "2efb50579edc11370a94ea0b7fc61f22cbacc1339a22a04a41b20066c617138d715d9562",
                "9a837e4f74633f823dddda0a0a40d0f37b59a4ac098c86414715db364a4e32216084c561",
                "acdd79e0860b1fdf7497b159cb13230451200296c902ee000000009f2bc7392102449fb5",
                "237efe8f647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce6800eb604ecae881c",
                "e1eb68dcc1f94725f70aedec1e60077b59eb4ce4b44d5475ba16b8b0b370cad583eaf342",
                "b4442bc0f09001f1cb1074526c58f2047892f79c252321038439233261789dd340bdc145",
                "0172d9c671b72ee8c0b2736ed2a3a250760897fdacd6bf9c0c881001dc5749966a2f6562",
                "f291339521b3894326c0740de880565549fc6838933c95fbee05ff547ae89bad63e92f55",
                "2ca3ea4cc01ac3e4869d0dc61b",
            ),
            expected_limited_id: "7223b8cc572bdf8f123ee7dd0316962f0367b0be8bce9b6e9465d1f413d95616",
            expected_proof_id: "95c9673bc14f3c36e9310297e8df81867b42dd1a7bb7944aeb6c1797fbd2a6d5",
        },
    ]
}

/// Get all golden delegation vectors.
pub fn delegation_vectors() -> Vec<DelegationVector> {
    vec![
        DelegationVector {
            name: "one level from the one-stake proof",
            limited_id: "e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864",
            master_secret: MASTER_SECRET,
            delegated: &[LEVEL1_PUB],
            delegator_secrets: &[MASTER_SECRET],
            expected_hex: concat!(
                "6428c2c29a116191d42fe68e74f1ee33f8a285c13320d77b201c3ab9135c84e521030b4c86",
                "6585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744012103e49f9df52d",
                "e2dea81cf7838b82521b69f2ea360f1c4eed9e6c89b7d0f9e645ef22c1dd0a15c32d251dd9",
                "93dde979e8f2751a468d622ca7db10bfc11180497d0ff4be928f362fd8fcd5259cef923bb4",
                "71840c307e9bc4f89e5426b4e67b72d90e",
            ),
            expected_id: "2d61fac0ba1bef5bcd7bddbbdf23cd93f0d501df92f4fa0483179e21b8eea36a",
        },
        DelegationVector {
            name: "two levels from the one-stake proof",
            limited_id: "e5845c13b93a1c207bd72033c185a2f833eef1748ee62fd49161119ac2c22864",
            master_secret: MASTER_SECRET,
            delegated: &[LEVEL1_PUB, LEVEL2_PUB],
            delegator_secrets: &[MASTER_SECRET, LEVEL1_SECRET],
            expected_hex: concat!(
                "6428c2c29a116191d42fe68e74f1ee33f8a285c13320d77b201c3ab9135c84e521030b4c86",
                "6585dd868a9d62348a9cd008d6a312937048fff31670e7e920cfc7a744022103e49f9df52d",
                "e2dea81cf7838b82521b69f2ea360f1c4eed9e6c89b7d0f9e645ef22c1dd0a15c32d251dd9",
                "93dde979e8f2751a468d622ca7db10bfc11180497d0ff4be928f362fd8fcd5259cef923bb4",
                "71840c307e9bc4f89e5426b4e67b72d90e2103aac52f4cfca700e7e9824298e0184755112e",
                "32f359c832f5f6ad2ef62a2c024a77c153340bb951e56df134c66042426f4fe33b670bb2d4",
                "85f6d96f9d0d1db525dfa449565b8f424d71615d5f6c9399334b2550d554577ffa2ee8d758",
                "eb8ded88",
            ),
            expected_id: "f0ed40331be7cc1508b6ea9c6b7fbb7293424af05e83828f23790dab0027acda",
        },
        DelegationVector {
            name: "one level from a bare limited id",
            limited_id: "c1283084c878408b2a5a11b7a1155b3cccce91526e4da0ba3947bbcf9d9ed402",
            master_secret: MASTER2_SECRET,
            delegated: &[LEVEL1_PUB],
            delegator_secrets: &[MASTER2_SECRET],
            expected_hex: concat!(
                "02d49e9dcfbb4739baa04d6e5291cecc3c5b15a1b7115a2a8b4078c8843028c121023b",
                "eefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3012103e4",
                "9f9df52de2dea81cf7838b82521b69f2ea360f1c4eed9e6c89b7d0f9e645effa701924",
                "fe7367835b3a0fb30bcc706f00624633980f601987400bb24551cf57bd9f2d106f5c58",
                "4e4e0efa2069a606cf1aa64f776ccb3304f8486eb3d1ce3acf",
            ),
            expected_id: "b1af8eeef6600a9e0b90c5ede4cb686a63d4e247514bca21d2218bd0c3b4e859",
        },
        DelegationVector {
            name: "one level, node test framework",
            limited_id: "0d45ca55662c483107b45f5c5699e0d8c7778b245c116cb988abba1afa6a1146",
            master_secret: MASTER2_SECRET,
            delegated: &[LEVEL1_PUB],
            delegator_secrets: &[MASTER2_SECRET],
            expected_hex: concat!(
                "46116afa1abaab88b96c115c248b77c7d8e099565c5fb40731482c6655ca450d21",
                "023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3",
                "012103e49f9df52de2dea81cf7838b82521b69f2ea360f1c4eed9e6c89b7d0f9e6",
                "45ef7d512ddbea7c88dcf38412b58374856a466e165797a69321c0928a89c64521",
                "f7e2e767c93de645ef5125ec901dcd51347787ca29771e7786bbe402d2d5ead0dc",
            ),
            expected_id: "ffcd49dc98ebdbc90e731a7b0c89939bfe082f15f3aa82aca657176b83669185",
        },
    ]
}

/// Build the proof a vector describes.
pub fn build_proof(vector: &ProofVector) -> Proof {
    let master = PrivateKey::from_hex(vector.master_secret, true).expect("vector master secret");
    let payout = PayoutScript::from_hex(vector.payout_hex).expect("vector payout hex");
    let mut builder = ProofBuilder::new(
        vector.sequence,
        vector.expiration_time,
        payout,
        Signer::Key(master),
    );
    for stake in vector.stakes {
        let key = PrivateKey::from_hex(stake.secret, stake.compressed).expect("vector stake secret");
        let txid = TxId::from_hex(stake.txid).expect("vector txid");
        let stake = Stake::new(
            OutPoint::new(txid, stake.vout),
            stake.amount,
            stake.height,
            stake.is_coinbase,
            key.public_key(),
        );
        builder
            .sign_and_add_stake(stake, &key)
            .expect("vector stake key owns the stake");
    }
    builder.build()
}

/// Build the delegation a vector describes.
pub fn build_delegation(vector: &DelegationVector) -> Delegation {
    let master = PrivateKey::from_hex(vector.master_secret, true).expect("vector master secret");
    let limited_id = LimitedProofId::from_hex(vector.limited_id).expect("vector limited id");
    let mut builder = DelegationBuilder::new(limited_id, master.public_key(), None);
    for (secret, delegated) in vector.delegator_secrets.iter().zip(vector.delegated) {
        let delegator = PrivateKey::from_hex(secret, true).expect("vector delegator secret");
        let delegated = PublicKey::from_hex(delegated).expect("vector delegated key");
        builder
            .add_level(&delegator, delegated)
            .expect("vector delegators follow the chain");
    }
    builder.build()
}

/// Check every golden vector, returning a description of the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in proof_vectors() {
        let proof = build_proof(&vector);
        if proof.to_hex() != vector.expected_hex {
            return Err(format!("{}: encoding mismatch", vector.name));
        }
        if proof.proof_id().to_hex() != vector.expected_proof_id {
            return Err(format!("{}: proof id mismatch", vector.name));
        }
    }
    for vector in delegation_vectors() {
        let delegation = build_delegation(&vector);
        if delegation.serialize_hex() != vector.expected_hex {
            return Err(format!("{}: encoding mismatch", vector.name));
        }
        if delegation.id().to_hex() != vector.expected_id {
            return Err(format!("{}: delegation id mismatch", vector.name));
        }
    }
    Ok(())
}

/// Serialized proofs from the node's proof tests.
pub fn regular_format_vectors() -> Vec<RegularFormatVector> {
    vec![
        RegularFormatVector {
            name: "No utxo staked",
            proof_hex: concat!(
                "96527eae083f1f24625f049d9e54bb9a21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde3002321023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745",
                "fd683797dde3ac135da984db510334abe41134e3d4ef09ad006b1152be8bc413182bf6f947eac1f8",
                "580fe265a382195aa2d73935cabf86d90a8f666d0a62385ae24732eca51575",
            ),
            proof_id: "979dbc3b1351ee12f91f537e04e61fdf93a73d5ebfc317bccd12643b8be87b02",
            score: 0,
            outcome: Outcome::NoStake,
        },
        RegularFormatVector {
            name: "1 utxo staked",
            proof_hex: concat!(
                "a6d66db9fe9378fdd37a0ad2c01c2acd21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30145a4d07798547464daa53acefb7c97c0c415ed8e81e549ff56a0ef6f84",
                "7fcc9ca855b36200fe38dce5060000e707d7274104fb6626e21dbd1cc9feeecdefc9213fdce2b51a",
                "c4bb44e1f8dc6f14c2052f5dd7bfaeb2267a97ca2bec6e0dd4acf50a66204bde1ebb5d6c551684cf",
                "f2f939920f7fbb2efd860d6d5926bf425eb47b78bf6979cdcd67eb705e2c9a4d45a0930ba2546317",
                "8a3fb99cb28c8b77d8fcf68c54ebfadf08b9a446c251a0088301c50d532321023beefdde700a6bc0",
                "2036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac845148594a3067f06bc2cf495a1191",
                "c00e012dd3d0e4b0c393b3e46c2adcebc3df50f1a203f02e445a0101f467526becb0aa4c64400a10",
                "bbde83b3f0290bdeaa",
            ),
            proof_id: "e01bac293ed39e8d5e06214e7fe0bceb9646ef253ce501dcd7a475f802ab07f1",
            score: 7584312,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "2 utxo staked",
            proof_hex: concat!(
                "872379ab64f55b4166ca0e79639999ec21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde302fabf3ad5b875840e7813a66d5ea8a1288a49b6222b59fcbe6249f94e59",
                "27f9f4b884b0b040a534b3ba040000d045d5d021036830e697b0ee89866da798a8945bd85b352545",
                "ec1bcace7e04909ea54c134f16d5fe4e972b7acd29ebfc2b7b11c26974b84e5f21a45bbe8372472f",
                "59e5dfdea7e9e5857c6aebe5dbc5e646dfbf4e7cee380afaddb15d06153bf1755b9ef00a616d4c8c",
                "3c3a662b5eddc1926564a488e3e68e334291078001480f7fa5144ef3a606a41e85c0218dd3770900",
                "00e41099912102ebfcea8e1864c1273c41e0d7c1e9097be5c491bbbf5fe31161d8e5589b9d6b5b12",
                "f3b963c7fc7614d56d83af907e5cb18ac2f4c3e70a8c4253995f6bc002ec5e350491c965cba4dbc1",
                "1c210979217f1ac3ece7a748f5b2fcf5cced40a5d4c40e2321023beefdde700a6bc02036335b4df1",
                "41c8bc67bb05a971f5ac2745fd683797dde3acea8c988e488eaeef3dc441eb8ede93d2e249ecac3a",
                "4277d0347bb1abfdb79b7ebc507e5447309db034983b38bd663242834b89026424472e1922208632",
                "74b266",
            ),
            proof_id: "ebf52f8d3c845761e55ef145a37537162e5fbbcc87c58a5b0040d0a9c89003c4",
            score: 15610172,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "3 utxo staked",
            proof_hex: concat!(
                "525e2aa04af0e2457c66ac9e7f66257f21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde3039ce8d3b77938e49ce3bc9824e90b72c655422fb502f137e03a4499e522",
                "3d10096fe541eb80316ce3c80800000285f59341044fd7e95de7c7bb30e7f60434a3e1a414a9e5d9",
                "c383c7b27396b1b84355a32e2996ecb98dc20143089932fa1b905a60fc3cfefeea193c91d1405f7c",
                "03de494fa4de065c067d646060e9270281c316d5c4c01d7e43d009151a72bf647794ce1727cbefae",
                "b19719f916cd4dd176c376a4da72431b61736d4a3e01c25ba057eac0af8f2988b78d1b75e02281fa",
                "c562357a06353bf7f214c883e65add05b3a616300cb99cc963c0f4ded8c00e0000b03aabf8210317",
                "2b4f1890594508ab1e0cc5e9728b8a249660da4df724762a8fd888e8ece1bd6fe923ed17ad0fd77a",
                "90d31e3877de1a8cdb4e95bcf2cdd6fb9768f86789f253b432f3b5058b2d1892e90882529055fded",
                "f8ae5d3280b2404a65321cf7f7229202db300ff2897e33259a81dfc4bf296c3a156dc8dbfa074c60",
                "2dd2250cc531b346fc28bb80ddf29ddc020000a713a5bb21035615635d449988a4eea03fd317e444",
                "81bde2e34a2489f3fb24f0b0ea1cbfc4030bec095a8d3e9c2a233778535dc1fcc07755149b23ea8c",
                "17931a37e9377eaa2f45bafb8d0bb9ba1700aab88fd6a53ea3e83d95ad2d84e7abe828f557091b18",
                "5e2321023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3acf3c323",
                "76092a751c432eb727544e6e5caab7e9be1c947ece79995ddc883e6e1d48c6865554267cd8f388af",
                "277e4fa7a4ad6801f17db36074985ac477e250702b",
            ),
            proof_id: "8542635d83f8020bc781d9e8a3de53c23f5e3f77c21588719b58b6618ee1782b",
            score: 29026903,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "4 utxo staked",
            proof_hex: concat!(
                "eef33172651f752ac255c85a4e13749921023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde304295de5ebf9fbbbb65fc1d9a71587c5284cffb2e834addefe090b820043",
                "5668c8f02c0b0100689a117e0e000007d801582102a682d9d12d53b0eb37a3af2838510f07904190",
                "5a75f82b6a3fb5558728d781fbf868d1d96827b273f5a79f84ebe23add967a98f472fb80323439d0",
                "a65d546fc3745806f6d7f338124a7a2573864e97a26246644a7d7b05d97943dfcdb4b694df631e6d",
                "c5f87e28c1fe3e5ba021f38c471638769041db81ffcf8c9887d078419f97fe2a2c408fee822c0600",
                "001689b9cd2102e38d0adddcd7c88e3c87b8babcae10647e2862fb719839fc8890e42aeb929b85e1",
                "a3f14e2cdc65e2b1396f2dae41b047958cdc7e4d2f6fa051065829e26797c5b882e45bb9fea32c0b",
                "0e0ad90f8ac1e5d8d0b16a9b74d77614b7fd99e56b6091aca367f8f7a68d1b654e51dd00733bd191",
                "dc9bea2ba750e063b05d962aaf9c4d2088ce4f003e73e253040000a5eebe222103a20dd85b66b44b",
                "22fdd17a93762194c9bedb442c7ffd7f08a9f82c42a8c1d9a0443f700cb8a40c8cf7f840b5137b6d",
                "019efed961771d09588b0eb3c5e1672bb95b06ca7e2068e564001aa75b8c37bb6601117c286b6b0c",
                "9728d1e928ab02e3b67e9422b484ef2624ce5de974b5bd616874ec39d03d32ed0bf114759b70bf5d",
                "cef51534b100515301140f0000950121754104d66dba1569164a1341119611334bad5e2d398823f1",
                "454ceecb9c4266fd3ba4b969ac4d4f6c4b3975d19c2f7dcbbca096af5395780a2d3c42505146c095",
                "bc861fab15238fb8aa1fb82c7ad28b0ee5d133534876dc7887490c7c6e61103b2cd221f1991826a7",
                "3fecf08e0b5a0a7d357a5431eee032d14a348c80ca1833d68b3d7b2321023beefdde700a6bc02036",
                "335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac157f7621dd2ce427c07dc0da1fc46412ed",
                "d5c78b10ce70e7e6010c65d22de2f434e4f08c158af3c9f5a2411677bd69adbaec068cbb04e79f90",
                "dbdcb6be2b437f",
            ),
            proof_id: "6ba2a3ff986d5bc4457da693096bab408cfd8cf4e988e5ac013fe48a4e2961c9",
            score: 44059793,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac05a9ea3a5333926249331f34a41a35",
                "19bab179ce9228dc940019ee80f754da0499379229f9b49f1bccc6566a7347227299f77593944450",
                "5952f920ccea8b9f18",
            ),
            proof_id: "cdcdd71605139f49d4884b0c3d9a6be309f07b008a760bb3b25fcfcb7a3ffc46",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Duplicated UTXO",
            proof_hex: concat!(
                "c964aa6fde575e4ce8404581c7be874e21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde302d1e26c2287948bc6ab2b55945c591b8ba3ffa237f5d9164d30a4f10145",
                "a61f788e639b1480731e2aead30500bf8462872102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6806b8111af77e1076caba7cb76de29abae963b7f6a1879318e8e37ff",
                "488d5843b783215fe9561431ac55ecef78ce214869aac0c271d35bee7fdb0858a7ddffe3b0d1e26c",
                "2287948bc6ab2b55945c591b8ba3ffa237f5d9164d30a4f10145a61f788e639b1480731e2aead305",
                "00bf8462872102449fb5237efe8f647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce6802f",
                "5c4b2a2ab7fb315d3b9e0318e4e90faa997f28ea6fb31c3487332718079c10131da1acd028a093be",
                "651330679bb02bd471053e18a590e373a08c2e60ca15f92321038439233261789dd340bdc1450172",
                "d9c671b72ee8c0b2736ed2a3a250760897fdac3dfb66133d94674a3a6565d8f84e1a31e2f79a4bb3",
                "99c04adc802abcf8b395f62315d3ad8450ba57e11dfb61b1f5a7325094d5ffda1f5830e0990dcc2e",
                "bb9be8",
            ),
            proof_id: "5d4919b43a1afb6acdeddaf1678397eaa10562125db6b911ec4e35fd8598ad73",
            score: 3280755132,
            outcome: Outcome::DuplicateStake,
        },
        RegularFormatVector {
            name: "Properly signed 3 UTXO proof",
            proof_hex: concat!(
                "c964aa6fde575e4ce8404581c7be874e21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde3030b1e5f35704cb63360aa3d5f444ee35eea4c154c1af6d4e7595b409ada",
                "4b42377764698a915c2ac4000000000f28db322102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6809d1eddf2e46ca8bfc4ff8d512c2c9fed6371baf1335940397ec40b",
                "1d6da8f8f086f8cd01a90ecee97096d0cfc4f56f8b5166d03ee1d1935a5b4e79c11cbf9c74e4ed76",
                "e1f19b2c2a0fcc069b4ace4a078cb5cc31e9e19b266d0af41ea8bb0c30c8b47c95a856d9aa000000",
                "007dfdd89a2102449fb5237efe8f647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce680df",
                "cfdcf00a1ac526c8ca44fe095a0a204e5e2b85b0ad3fadaf53ec84e2c9408300f2dc21781346d71f",
                "941e045871f7931622dc4a4331c795d8ca596d24ddb021ac098c86414715db364a4e32216084c561",
                "acdd79e0860b1fdf7497b159cb13230451200296c902ee000000009f2bc7392102449fb5237efe8f",
                "647d32e8b64f06c22d1d40368eaca2a71ffc6a13ecc8bce6801f42d48c9369898b7c5eb4157f3074",
                "5b9ee51b32882b32032429f77166a1ebab6b88de018bf0340097887b1aeff8b7aa728a072b38e02e",
                "e8a70514db1de147ad2321038439233261789dd340bdc1450172d9c671b72ee8c0b2736ed2a3a250",
                "760897fdace7662689aa1c9c5d9d9a6dbe9a94859be27fbddca080abff31012a5277bc98630c47bb",
                "04830514ac04304d726b598e05c4cd89506bb2e1f0a78f54ab3f315cfe",
            ),
            proof_id: "95c9673bc14f3c36e9310297e8df81867b42dd1a7bb7944aeb6c1797fbd2a6d5",
            score: 10150,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Changing sequence affect ProofId but not the stake signature",
            proof_hex: concat!(
                "d87587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac80bdeb2ada22b35856fa25d2fe7a14",
                "5b4ce09c6332b72925dbf2b09140d6163863437a8076f7836fcbb7154b83165a65910d1b2a8c3655",
                "d111f008a57315f5a0",
            ),
            proof_id: "8b0640e7bf81f487d90d6b5c3ead4bc41eae418da4e6874618b289124e52ba1e",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Changing expiration affect ProofId",
            proof_hex: concat!(
                "d97587e6c882615797011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac5995555107107e656abd8e2852f311",
                "ff0f5c4f606695b63ec44e04303e3378a2e21e16bf05727240ebee1334d2f858c6c2e3bdd8d28940",
                "0b99d7f70b35f9d2fa",
            ),
            proof_id: "26ce40e7b5dfc8d3d48d743ed23fa6ff32ca269a59c4fb101b3b48e5d8450465",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the TxId affect the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30179a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9acaefee33b8b7a0ce4d5d1ab92ea8d08",
                "dd2538102a4dde790f6317558ceb68e5d2267aac97a0f313dccec827d0401a3095b4e862068077ce",
                "942380b474c30b64e0",
            ),
            proof_id: "4b57e163adc5174820ce21eb0e0e9d6565bc00d51bf9f86c58c56947428c2d84",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the outpoint index change the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91df00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9acecc6e78166848efad9772ba11ed0a8",
                "b1e9e844cbc2727c69c5e1898430548c9062a52ca9dc1dbe614213d9f7d5465dc297d0dc1880adb7",
                "daf088f6927a4d6a51",
            ),
            proof_id: "b569969b77b683904a89c3364c667ac434602936548c80352a85ffed4c934cbc",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the amount changes the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21814712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9acefbdde03c4cc7065075d066c693086",
                "c0df0b6b349ec9300ff1333cca65d076364560fb2cbb1365240cdd6c9c323d73fc17576da71a5c33",
                "6a170f76a1b52ffc89",
            ),
            proof_id: "6989ce300064196c177eae6fd73cf3f89719ddedf068e757eb39eb2030baa846",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the height changes the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010028e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac4fc8c51b5a993c0a8f3a53c88fb49f",
                "228305da66d20b8c73e7e9de55300ac1de52c898fa73e8c5f54a727edc4a676a66dc8bb89bd6c54d",
                "41053edceaead6d7b1",
            ),
            proof_id: "81d217bbfa019439ab6dfbe02b8b703b93eb26e6047a7ee3cc4aba1366286d8d",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the pubkey changes the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102459fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fc434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac893ad17cf6a17016f35337f6a10f85",
                "357689be2760734137c51225cbe0eca4fa00b671f50deacfb86afd61d9cdfae24aa1e9ced62954c4",
                "f8eb8114bb4fb852fe",
            ),
            proof_id: "e33e02f3d608b4a6447c3b3ee283763718716fff02f3a79e3251417bd03b9834",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "Changing the signature does NOT change the ProofId",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68099f1e258ab54f960102c8b480e1dd5795422791bb8a7a19e5542fe",
                "8b6a76df7fa09a3fd4be62db750131f1fbea6f7bb978288f7fe941c39ef625aa80576e19fd434104",
                "69ab5a892ffa4bb104a3d5760dd893a5502512eea4ba32a6d6672767be4959c0f70489b803a47a3a",
                "bf83f30e8d9da978de4027c70ce7e0d3b0ad62eb08edd8f9ac3359ba425e0084157ca510e3086569",
                "3578e3f5eb426d97597ccbd7766db411abaf653aea59c34861cbafeaee0768ae58fa2b68a7bfdcdb",
                "dc041c50ea59cf1b22",
            ),
            proof_id: "cdcdd71605139f49d4884b0c3d9a6be309f07b008a760bb3b25fcfcb7a3ffc46",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
        RegularFormatVector {
            name: "1 utxo staked but zero coins",
            proof_hex: concat!(
                "a6d6852ffa70b172d37a0ad2c01c2acd21023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30145a4d07798547464daa53acefb7c97c0c415ed8e81e549ff56a0ef6f84",
                "7fcc9ca855b3620000000000000000e707d7272102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680061c669954f964a68b43b1b354b65b651f349a3ff310a1dcb862aa",
                "285f26fc7f6fd0b9cb766f1e1f90fc63ce03c956b3dac9a4ac2fff963f643ae1326b08d33c232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac6ad76de70caa0f",
                "b0712a44e24f791244f733017920ef42c876220a9c50f0239d97414829fe9103741aba287579d8ea",
                "26ca28162e3091d53cc51fd58be9b18d22",
            ),
            proof_id: "c95e3c6417a799dd3085af689ea12fb3d2e1130870fef9f0bdc6d10a27df746a",
            score: 0,
            outcome: Outcome::DustThreshold,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, P2PK payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804534ca1f5e22670be3df5cbd5957d8dd83d05c8f17eae391f0e7ff",
                "dce4fb3defadb7c079473ebeccf88c1f8ce87c61e451447b89c445967335ffd1aadef42998232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "455f34eb8a00b0799630071c0728481bdb1653035b1484ac33e974aa4ae7db6d",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, P2PKH payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804848a02e2b1c8aa1d21c31b056ab6a63f08e07bb0b56258d1c58b8",
                "7f3ff472b7b5b9a5907142a04041e95e6874ae0874d0f7bbe266f7c4606af315711d0f49341976a9",
                "14f8172c51efbf34413a308a030fd4b164c5bfcd8f88ac2d805b078f5efe022304f8c6ccd0ef5255",
                "d806a473fc85a5ad1caf1aa94a4e49ef7625b9dc85d263b2829d5822af62226bc50a4a8376a3a6e1",
                "cd0a37ea2fbbf9",
            ),
            proof_id: "8a2fcc5700a89f37a3726cdf3202353bf61f280815a9df744e3c9de6215a745a",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, P2SH payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680575db01b675b042bf1ab89aa6ad3842804bb57bf87ebf2bfbcb169",
                "debdbf9c51e5d2638eb981bfd0e7465a5f3edd152d52b2f6d0108fcd277168be362e849e1f17a914",
                "da1745e9b549bd0bfa1a569971c77eba30cd5a4b87fea0a245528a4aadfc1dd5731c0cfe738e276c",
                "93815c69789fe97b15a5fb5b4f75b598ed94096205561e8d16203b8ef21763891d8e79a59862bccb",
                "bd5bdf3a58",
            ),
            proof_id: "c61ee0416eb9549ea0e09dfd2c6062a11aa5d3ab0adcdf59abcc02dd0de401fc",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, 1-of-1 multisig payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680ea4c55850f587c7839fe254880547049a8be7c27cf511e440fa462",
                "37db32dced28e0c10edcf5ddb31e2f61e5c749e7324e7edf9aa09547810d64a12fb960a206255121",
                "023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde351ae29eaecb058",
                "c9bb74eef68dbeaa5da8b96aacc00bc89c911095ad016cfbdc53b1eeb10a9f29d6c48a5fb3a1e6e3",
                "0d332a05bdc67062f94acffbe6d6c909bb5643",
            ),
            proof_id: "29deedc94713bbc4d4f88fe96fae6801b91c5ae50601f158fa76a036e18ea468",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, 2-of-3 multisig payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680edf24d6c6e1ed44a0e0d651d5d2611f80e5c921778c3cbc2923fad",
                "e878d7d9c69e5f4f7ff0c8dd9985ff427011c5cf0cac854c607e1d788d140f8b6d6010aad8695221",
                "023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde321023beefdde70",
                "0a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde321023beefdde700a6bc0203633",
                "5b4df141c8bc67bb05a971f5ac2745fd683797dde353ae34814734c1bd2c476fdae6fb1145530c32",
                "44878f3c2e0c2e5c05da14f17456aedee6beb80f68f42248fd89042346be54beaef7da8e549d7d5f",
                "f07f9a2cc63c83",
            ),
            proof_id: "c24dc13d98d0e0a80c19346b9590368557a66f0f65c0088c179d89eca25107c8",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Properly signed 1 UTXO proof, OP_RETURN payout script",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680b746fe5c9d10002880169f03c69456f57d60589cd451c2fa078fc0",
                "241a022f2c6f1736b4bb49ea0d7b878e581de9625f301c68defeda9d506f9b128dbccb08481b6a19",
                "492077616e7420746f206275726e206d792072657761726473f42ae2e5fa253a700e5dcb3970a894",
                "db448b61960b45c84723bf769d4dab0370994d0163e235b688da2fabc8e5b57e24805dce3baa62e0",
                "64c32266a723c6adb6",
            ),
            proof_id: "bfc250ca1986177acc779f26eaff80aa8916d23cb3e7e0ce6d3589c4f5ea364c",
            score: 444638638,
            outcome: Outcome::Valid,
        },
        RegularFormatVector {
            name: "Invalid payout script (OP_FALSE)",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce68082a5aec394b2a25fedc70a81f93bb08b46a51bd1259f3f10fa421a",
                "4989039d74d30cf449de3b8b46551b8ec927a83d16caaf8fc32636110407cfc9effbaf8c210100b7",
                "1f0e77b4ad5d73d5a872ab43699309b5c194f72be5ee0812236c1a46a5b2c22ddd71d909cf52143f",
                "48754a61dfe0c6566342fa50b7d62c40fb44d1ff5abed3",
            ),
            proof_id: "046e75fa2d7f0868dcfa683bbdf657fc6a49b8f8b0d5c2dfdf90736ded26b076",
            score: 444638638,
            outcome: Outcome::InvalidPayoutScript,
        },
        RegularFormatVector {
            name: "Invalid payout script (1-of-5 multisig)",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804d972714d8bcdeb680cd736ee6252c92453d7de362b97007c77abe",
                "1d76c80c41b502aa331a94d50fb2d709b66a679e2b4b2385dd2f4fad13c85015fc4c6ae7e4ad5121",
                "023beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde321023beefdde70",
                "0a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde321023beefdde700a6bc0203633",
                "5b4df141c8bc67bb05a971f5ac2745fd683797dde321023beefdde700a6bc02036335b4df141c8bc",
                "67bb05a971f5ac2745fd683797dde321023beefdde700a6bc02036335b4df141c8bc67bb05a971f5",
                "ac2745fd683797dde355ae005dfe80b01bc99f93ae1d1c2d7176f7ea54a7f7c76b6eabb1aec5d31d",
                "e170b0690282f624d01070fb270018694aea6a73ac5b7a96e30ed69df9b7684298b986",
            ),
            proof_id: "e66b0ab11de5e2f358d2e1f65b1ebe608e4a1f10a9f5d42f1173b262e1a218a6",
            score: 444638638,
            outcome: Outcome::InvalidPayoutScript,
        },
        RegularFormatVector {
            name: "Changing the payout address changes the proof signature (P2PK) but not the stake signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804534ca1f5e22670be3df5cbd5957d8dd83d05c8f17eae391f0e7ff",
                "dce4fb3defadb7c079473ebeccf88c1f8ce87c61e451447b89c445967335ffd1aadef42998232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde4ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "ce2812a1decdef0267e0266c68ab53c5ecad292f7b7d0fbd3db9285a08ccd2a1",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the sequence changes the proof signature",
            proof_hex: concat!(
                "da7587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6808ef3a5bb64dc73a757aba041f348e7bc93c9c96f53a3d48a9a9df6",
                "f505f37283834788bad9370e9e6e702f8ba5323d38cb3b720adfefee6af4187ee6d9bed248232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "37a08e004f35d6410b24a5724b8351b41d4e3ac04f285cd76d73a023b2ae5519",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the expiration time changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615797011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680e475b4323aa8775b6b0ab82985f515bd95fb1cc18389d40c7a59a4",
                "9df1ffa788ae68cfcc21e60c0e39806e935ce19b71f1182f4ca83f51d654a95b2e9b021ea1232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "1312eff53594f63e61f044c36b2cf2d3e7e44c706f17bfabcf49954741380bbc",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the master pubkey does NOT change the proof signature (but signature verification obviously fails)",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde40169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680306b113bd2fc0e5c4f0cc46aed8a6c8efb0b5bcdc214ad78a29e00",
                "b1174c67d1c4576f4d815ba74ef6bdd0d8243402f6c4c8dcf71a4eb24d97f6d6b1d4a65b91232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "de837b44ae2df5408f89dc42039ae53a61ea508a15e214e69a50d940b72e7713",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the TxId changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde3016aa79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680e0d7f1933eb1e4f9011b9cf363f198f764ff5d65f471f4e4568bee",
                "ed834d15f6917378fc9f84a3a5c3e445329dbfed556d82ba43e74619e32baad4b3437e2f48232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "2c90b8359740d675952b570cca76ffb7c1a225984b8c7f47bc27607c58a613b5",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the outpoint index changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91df00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6803671ac4cd4928d9db4be75e0213709e903855369c90f2bd8459ad2",
                "4ad936a09c550b87d2ab7c7c0f1e7b18c484c65aa175e3fc10088b198334d9b2846d7c1927232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "289c082f835c2edd24b95e1aee7dbb353dff30cdcaab02d5dc2ac44c57181468",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the amount changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21814712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce680c4a8d2cbb3ef086b41da91cbf99404c4970fee9cd8dff8c82d4169",
                "751e1049fb2506a194e14ef964f308f1afdbb3853df59f58fa88cedcf71722f8130f89e6ef232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "8d97d3ed1884462122976da4706778593fc4b5eaafb859bec0b45f590219f5ba",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the height changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf2180471280659401003ae168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804fb8adfb4e08ad2e6284042968f65dfe365b975492fdac597c75ae",
                "91edcb3b0d7ad9352d0cff1b27577eb5fc4646f0106d57d214f71ce21272eb31af09482f2b232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "690cb3d74b5add1cfb7d4cf186426d41117586c57d59da330cc950e2d18d613c",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the coinbase flag changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010039e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6807b0eeab05c31d69c288fab140311274530dea518a7b62846c33e6a",
                "087b489210fed85b8a18017d430751e81e276aecdb565a3cd5c58b5a0f81cbf5af33196dfd232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "f713dec5d2f798360748914face171d5a45706b9c5f0bc4d561f6e80e098beef",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the stake pubkey changes the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6814534ca1f5e22670be3df5cbd5957d8dd83d05c8f17eae391f0e7ff",
                "dce4fb3defadb7c079473ebeccf88c1f8ce87c61e451447b89c445967335ffd1aadef42998232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "df84548b3a085e29d58ba5e83ad2fd1c9ecbe8595d4240f3f588e52af84cc65b",
            score: 444638638,
            outcome: Outcome::InvalidProofSignature,
        },
        RegularFormatVector {
            name: "Changing the stake signature does NOT change the proof signature",
            proof_hex: concat!(
                "d97587e6c882615796011ec8f9a7b1c621023beefdde700a6bc02036335b4df141c8bc67bb05a971",
                "f5ac2745fd683797dde30169a79ff23e1d58c64afad42ad81cffe53967e16beb692fc5776bb442c7",
                "9c5d91de00cf21804712806594010038e168a32102449fb5237efe8f647d32e8b64f06c22d1d4036",
                "8eaca2a71ffc6a13ecc8bce6804534ca1f5e22670be3df5cbd5957d8dd83d05c8f17eae391f0e7ff",
                "dce4fb3defadb7c079473ebeccf88c1f8ce87c61e451447b89c445967335ffd1aadef42999232102",
                "3beefdde700a6bc02036335b4df141c8bc67bb05a971f5ac2745fd683797dde3ac7b0b7865200f63",
                "052ff980b93f965f398dda04917d411dd46e3c009a5fef35661fac28779b6a22760c00004f5ddf7d",
                "9865c7fead7e4a840b947939590261640f",
            ),
            proof_id: "455f34eb8a00b0799630071c0728481bdb1653035b1484ac33e974aa4ae7db6d",
            score: 444638638,
            outcome: Outcome::InvalidStakeSignature,
        },
    ]
}
