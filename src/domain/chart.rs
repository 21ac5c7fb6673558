use std::collections::HashSet;
use std::sync::LazyLock;

/// Account codes recognised in the account column of a ledger export.
/// Any other value in that column never opens an account.
pub const ACCOUNT_CODES: [&str; 125] = [
    "103100", "103200", "105000", "4011", "401100003", "401100174", "401100291", "401100502",
    "401100503", "401100714", "401100PRO", "401101063", "401101104", "401101199", "401101209",
    "401101220", "401101304", "401101443", "401101468", "401101962", "401102745", "401102806",
    "401103437", "401103812", "401104423", "401104434", "401105338", "401105997", "401106184",
    "4011GEM", "4011HUMAP", "4011NEOPO", "4011SPGAF", "4011SPGAG", "4011SPGHO", "4011SPGPE",
    "4011SPGSI", "421000", "431000", "437100", "437300", "438630", "442100", "443100",
    "45000001", "45000002", "45000003", "45000004", "45000005", "45000006", "45000007",
    "45000011", "45000021", "45000031", "45000042", "45000051", "45000061", "45000071",
    "45000081", "45000092", "45000102", "45000111", "45000121", "45000131", "45000142",
    "45000151", "45000421", "45000651", "45000661", "45000701", "45000731", "457000", "458000",
    "462", "471000", "471100", "488000", "488616", "501C0403", "50212200", "5125200",
    "512C0403", "580000", "601000", "601110", "602000", "602072", "602073", "606000", "606101",
    "606963", "611000", "613050", "614000", "614122", "614123", "614128", "614400", "614501",
    "614801", "615020", "615031", "615702", "621100", "621110", "622050", "622210", "622220",
    "62238", "623050", "623500", "623925", "632000", "633120", "633121", "641100", "642100",
    "642300", "671210101", "701000", "701200", "7021200101", "7021210101", "713100", "713110",
];

static KNOWN_CODES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ACCOUNT_CODES.iter().copied().collect());

/// Exact membership test against [`ACCOUNT_CODES`]; no prefix matching.
pub fn is_known_account_code(code: &str) -> bool {
    KNOWN_CODES.contains(code)
}
