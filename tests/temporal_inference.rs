mod helpers;

use exprtype::types::{Charset as Cs, FieldTypeTp as Tp};
use helpers::data::*;
use helpers::harness::assert_cases;

#[test]
fn time_functions() {
    assert_cases(TIME_FUNCTIONS);
}

const TIME_FUNCTIONS: &[TypeCase] = &[
    case("time_format('150:02:28', '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("time_format(123456, '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("time_format('bad string', '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("time_format(null, '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("date_format(null, '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("date_format('2017-06-15', '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("date_format(151113102019.12, '%r%r%r%r')", Tp::VarString, Cs::Utf8mb4, NONE, 44, -1),
    case("timestampadd(HOUR, c_int_d, c_timestamp_d)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(minute, c_double_d, c_timestamp_d)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(SeconD, c_int_d, c_char)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(SeconD, c_varchar, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(SeconD, c_int_d, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(SeconD, c_double_d, c_bchar)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("timestampadd(SeconD, c_int_d, c_blob_d)", Tp::String, Cs::Utf8mb4, NONE, 19, -1),
    case("to_seconds(c_char)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("to_days(c_char)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("unix_timestamp(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_float_d    )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_double_d   )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_decimal    )", Tp::NewDecimal, Cs::Binary, BIN, 15, 3),
    case("unix_timestamp(c_decimal_d  )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_datetime   )", Tp::NewDecimal, Cs::Binary, BIN, 14, 2),
    case("unix_timestamp(c_datetime_d )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_time       )", Tp::NewDecimal, Cs::Binary, BIN, 15, 3),
    case("unix_timestamp(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_timestamp  )", Tp::NewDecimal, Cs::Binary, BIN, 16, 4),
    case("unix_timestamp(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp(c_char       )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_varchar    )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_text_d     )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_binary     )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_varbinary  )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_blob_d     )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_set        )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(c_enum       )", Tp::NewDecimal, Cs::Binary, BIN, 18, 6),
    case("unix_timestamp(null         )", Tp::Longlong, Cs::Binary, BIN, 11, 0),
    case("unix_timestamp('12:12:12.123')", Tp::NewDecimal, Cs::Binary, BIN, 15, 3),
    case("unix_timestamp('12:12:12.1234')", Tp::NewDecimal, Cs::Binary, BIN, 16, 4),
    case("timestampdiff(MONTH, c_datetime, c_datetime)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("timestampdiff(QuarteR, c_char, c_varchar)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("timestampdiff(second, c_int_d, c_bchar)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("timestampdiff(YEAR, c_blob_d, c_bigint_d)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("addtime(c_int_d, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_datetime_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("addtime(c_datetime, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 2),
    case("addtime(c_timestamp, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 4),
    case("addtime(c_timestamp_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("addtime(c_time, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("addtime(c_time_d, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("addtime(c_char, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_char, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_char, c_int_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_timestamp)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_time)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_int_d, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_datetime_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("subtime(c_datetime, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 2),
    case("subtime(c_timestamp, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 4),
    case("subtime(c_timestamp_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("subtime(c_time, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("subtime(c_time_d, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("subtime(c_char, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_char, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_char, c_int_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_timestamp)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_time)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("timestamp(c_int_d)", Tp::Datetime, Cs::Binary, BIN, 19, -1),
    case("timestamp(c_float_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_double_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_decimal)", Tp::Datetime, Cs::Binary, BIN, 23, -1),
    case("timestamp(c_udecimal)", Tp::Datetime, Cs::Binary, BIN, 23, -1),
    case("timestamp(c_decimal_d)", Tp::Datetime, Cs::Binary, BIN, 19, -1),
    case("timestamp(c_udecimal_d)", Tp::Datetime, Cs::Binary, BIN, 19, -1),
    case("timestamp(c_datetime)", Tp::Datetime, Cs::Binary, BIN, 22, -1),
    case("timestamp(c_datetime_d)", Tp::Datetime, Cs::Binary, BIN, 19, -1),
    case("timestamp(c_timestamp)", Tp::Datetime, Cs::Binary, BIN, 24, -1),
    case("timestamp(c_time)", Tp::Datetime, Cs::Binary, BIN, 23, -1),
    case("timestamp(c_time_d)", Tp::Datetime, Cs::Binary, BIN, 19, -1),
    case("timestamp(c_bchar)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_char)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_varchar)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_text_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_btext_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_blob_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_set)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_enum)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_int_d, c_float_d)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_datetime, c_timestamp)", Tp::Datetime, Cs::Binary, BIN, 24, -1),
    case("timestamp(c_timestamp, c_char)", Tp::Datetime, Cs::Binary, BIN, 26, -1),
    case("timestamp(c_int_d, c_datetime)", Tp::Datetime, Cs::Binary, BIN, 22, -1),
    case("addtime(c_int_d, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_datetime_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("addtime(c_datetime, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 2),
    case("addtime(c_timestamp, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 4),
    case("addtime(c_timestamp_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("addtime(c_time, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("addtime(c_time_d, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("addtime(c_char, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_char, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_char, c_int_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_timestamp)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("addtime(c_date, c_time)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_int_d, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_datetime_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("subtime(c_datetime, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 2),
    case("subtime(c_timestamp, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 4),
    case("subtime(c_timestamp_d, c_time_d)", Tp::Datetime, Cs::Binary, BIN, 26, 0),
    case("subtime(c_time, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("subtime(c_time_d, c_time)", Tp::Duration, Cs::Binary, BIN, 15, 3),
    case("subtime(c_char, c_time_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_char, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_char, c_int_d)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_datetime)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_timestamp)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("subtime(c_date, c_time)", Tp::String, Cs::Utf8mb4, NONE, 26, -1),
    case("hour(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_time     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_char     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_set      )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("minute(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_time     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_char     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_set      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_time     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_char     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_set      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("microsecond(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_time     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_char     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_set      )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("datediff(c_char, c_datetime)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("datediff(c_int_d, c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("datediff(c_double_d, c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("datediff(c_bchar, c_decimal)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("datediff(c_varchar, c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("datediff(c_float_d, c_time)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("dayofmonth(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_time     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_char     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_set      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofmonth(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("dayofyear(c_int_d     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_time     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_char     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_set      )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofyear(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("dayofweek(c_bigint_d  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_float_d   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_double_d  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_decimal  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_datetime )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_time     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_timestamp)", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_char     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_varchar  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_text_d    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_binary   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_varbinary)", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_blob_d    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_set      )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("dayofweek(c_enum     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("hour(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_char       )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_set        )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("hour(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 3, 0),
    case("minute(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_char       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_set        )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("minute(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_char       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_set        )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("second(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("microsecond(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_char       )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_set        )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("microsecond(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("last_day(c_datetime)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_datetime_d)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_timestamp)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_timestamp_d)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_char)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_varchar)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_varchar)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_text_d)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("last_day(c_blob_d)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("week(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_char       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_set        )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_int_d      , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_bigint_d   , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_float_d    , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_double_d   , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_decimal    , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_datetime   , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_time_d     , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_timestamp_d, c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_char       , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_varchar    , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_text_d     , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_binary     , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_varbinary  , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_blob_d     , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_set        , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("week(c_enum       , c_double_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_char       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_set        )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("weekofyear(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("yearweek(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_char       )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_set        )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("yearweek(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("year(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_char       )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_set        )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("year(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 4, 0),
    case("month(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_char       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_set        )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("month(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 2, 0),
    case("monthName(c_int_d      )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_bigint_d   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_float_d    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_double_d   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_decimal    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_datetime   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_time_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_timestamp_d)", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_char       )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_varchar    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_text_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_binary     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_varbinary  )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_blob_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_set        )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("monthName(c_enum       )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_int_d      )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_bigint_d   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_float_d    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_double_d   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_decimal    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_datetime   )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_time_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_timestamp_d)", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_char       )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_varchar    )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_text_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_binary     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_varbinary  )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_blob_d     )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_set        )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("dayName(c_enum       )", Tp::VarString, Cs::Utf8mb4, NONE, 10, -1),
    case("now()", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("now(0)", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("now(1)", Tp::Datetime, Cs::Binary, BIN, 21, 1),
    case("now(2)", Tp::Datetime, Cs::Binary, BIN, 22, 2),
    case("now(3)", Tp::Datetime, Cs::Binary, BIN, 23, 3),
    case("now(4)", Tp::Datetime, Cs::Binary, BIN, 24, 4),
    case("now(5)", Tp::Datetime, Cs::Binary, BIN, 25, 5),
    case("now(6)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("now(7)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("utc_timestamp()", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("utc_timestamp(0)", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("utc_timestamp(1)", Tp::Datetime, Cs::Binary, BIN, 21, 1),
    case("utc_timestamp(2)", Tp::Datetime, Cs::Binary, BIN, 22, 2),
    case("utc_timestamp(3)", Tp::Datetime, Cs::Binary, BIN, 23, 3),
    case("utc_timestamp(4)", Tp::Datetime, Cs::Binary, BIN, 24, 4),
    case("utc_timestamp(5)", Tp::Datetime, Cs::Binary, BIN, 25, 5),
    case("utc_timestamp(6)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("utc_timestamp(7)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("utc_time()", Tp::Duration, Cs::Binary, BIN, 8, 0),
    case("utc_time(0)", Tp::Duration, Cs::Binary, BIN, 8, 0),
    case("utc_time(1)", Tp::Duration, Cs::Binary, BIN, 10, 1),
    case("utc_time(2)", Tp::Duration, Cs::Binary, BIN, 11, 2),
    case("utc_time(3)", Tp::Duration, Cs::Binary, BIN, 12, 3),
    case("utc_time(4)", Tp::Duration, Cs::Binary, BIN, 13, 4),
    case("utc_time(5)", Tp::Duration, Cs::Binary, BIN, 14, 5),
    case("utc_time(6)", Tp::Duration, Cs::Binary, BIN, 15, 6),
    case("utc_time(7)", Tp::Duration, Cs::Binary, BIN, 15, 6),
    case("utc_date()", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("curdate()", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("sysdate(4)", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("date(c_int_d      )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_bigint_d   )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_float_d    )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_double_d   )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_decimal    )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_datetime   )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_time_d     )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_timestamp_d)", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_char       )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_varchar    )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_text_d     )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_binary     )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_varbinary  )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_blob_d     )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_set        )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("date(c_enum       )", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("from_days(c_int_d      )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_bigint_d   )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_float_d    )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_double_d   )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_decimal    )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_datetime   )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_time_d     )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_timestamp_d)", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_char       )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_varchar    )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_text_d     )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_binary     )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_varbinary  )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_blob_d     )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_set        )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("from_days(c_enum       )", Tp::Datetime, Cs::Binary, BIN, 10, 0),
    case("weekday(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_char       )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_set        )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("weekday(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_char       )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_set        )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("quarter(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 1, 0),
    case("current_time()", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("current_time(0)", Tp::Duration, Cs::Binary, BIN, 15, 0),
    case("current_time(6)", Tp::Duration, Cs::Binary, BIN, 15, 6),
    case("sec_to_time(c_int_d      )", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("sec_to_time(c_bigint_d   )", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("sec_to_time(c_float_d    )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_double_d   )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_decimal    )", Tp::Duration, Cs::Binary, BIN, 14, 3),
    case("sec_to_time(c_decimal_d  )", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("sec_to_time(c_datetime   )", Tp::Duration, Cs::Binary, BIN, 13, 2),
    case("sec_to_time(c_time       )", Tp::Duration, Cs::Binary, BIN, 14, 3),
    case("sec_to_time(c_time_d     )", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("sec_to_time(c_timestamp  )", Tp::Duration, Cs::Binary, BIN, 15, 4),
    case("sec_to_time(c_timestamp_d)", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("sec_to_time(c_char       )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_varchar    )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_text_d     )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_binary     )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_varbinary  )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_blob_d     )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_set        )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("sec_to_time(c_enum       )", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("time_to_sec(c_int_d      )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_bigint_d   )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_float_d    )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_double_d   )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_decimal    )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_decimal_d  )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_datetime   )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_time       )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_time_d     )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_timestamp  )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_timestamp_d)", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_char       )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_varchar    )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_text_d     )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_binary     )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_varbinary  )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_blob_d     )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_set        )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("time_to_sec(c_enum       )", Tp::Longlong, Cs::Binary, BIN, 10, 0),
    case("str_to_date(c_varchar, '%Y:%m:%d')", Tp::Date, Cs::Binary, BIN, 10, 0),
    case("str_to_date(c_varchar, '%Y:%m:%d %H:%i:%s')", Tp::Datetime, Cs::Binary, BIN, 19, 0),
    case("str_to_date(c_varchar, '%Y:%m:%d %H:%i:%s.%f')", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("str_to_date(c_varchar, '%H:%i:%s')", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("str_to_date(c_varchar, '%H:%i:%s.%f')", Tp::Duration, Cs::Binary, BIN, 15, 6),
    case("period_add(c_int_d      , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_bigint_d   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_float_d    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_double_d   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_decimal    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_datetime   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_time_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_timestamp_d, c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_char       , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_varchar    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_text_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_binary     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_varbinary  , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_blob_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_set        , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_add(c_enum       , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_int_d      , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_bigint_d   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_float_d    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_double_d   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_decimal    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_datetime   , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_time_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_timestamp_d, c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_char       , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_varchar    , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_text_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_binary     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_varbinary  , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_blob_d     , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_set        , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("period_diff(c_enum       , c_int_d)", Tp::Longlong, Cs::Binary, BIN, 6, 0),
    case("maketime(c_int_d, c_int_d, c_double_d)", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("maketime(c_int_d, c_int_d, c_decimal)", Tp::Duration, Cs::Binary, BIN, 14, 3),
    case("maketime(c_int_d, c_int_d, c_decimal_d)", Tp::Duration, Cs::Binary, BIN, 10, 0),
    case("maketime(c_int_d, c_int_d, c_char)", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("maketime(c_int_d, c_int_d, c_varchar)", Tp::Duration, Cs::Binary, BIN, 17, 6),
    case("maketime(c_int_d, c_int_d, 1.2345)", Tp::Duration, Cs::Binary, BIN, 15, 4),
    case("get_format(DATE, 'USA')", Tp::VarString, Cs::Utf8mb4, NONE, 17, -1),
    case("convert_tz(c_time_d, c_text_d, c_text_d)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("from_unixtime(20170101.999)", Tp::Datetime, Cs::Binary, BIN, 26, 3),
    case("from_unixtime(20170101.1234567)", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("from_unixtime('20170101.999')", Tp::Datetime, Cs::Binary, BIN, 26, 6),
    case("from_unixtime(20170101.123, '%H')", Tp::VarString, Cs::Utf8mb4, NONE, 2, -1),
    case("extract(day from c_char)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
    case("extract(hour from c_char)", Tp::Longlong, Cs::Binary, BIN, 20, 0),
];
