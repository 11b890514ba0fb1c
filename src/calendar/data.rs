//! Statutory holiday and shifted-workday tables, 2011-2026.
//!
//! Entries follow the annual State Council notices on holiday arrangements.
//! Both tables are listed in date order.

/// Statutory non-working days and the festival each belongs to.
pub(crate) static HOLIDAYS: &[(&str, &str)] = &[
    ("2011-01-01", "元旦"),
    ("2011-01-02", "元旦"),
    ("2011-01-03", "元旦"),
    ("2011-02-02", "春节"),
    ("2011-02-03", "春节"),
    ("2011-02-04", "春节"),
    ("2011-02-05", "春节"),
    ("2011-02-06", "春节"),
    ("2011-02-07", "春节"),
    ("2011-02-08", "春节"),
    ("2011-04-03", "清明节"),
    ("2011-04-04", "清明节"),
    ("2011-04-05", "清明节"),
    ("2011-04-30", "劳动节"),
    ("2011-05-01", "劳动节"),
    ("2011-05-02", "劳动节"),
    ("2011-06-04", "端午节"),
    ("2011-06-05", "端午节"),
    ("2011-06-06", "端午节"),
    ("2011-09-10", "中秋节"),
    ("2011-09-11", "中秋节"),
    ("2011-09-12", "中秋节"),
    ("2011-10-01", "国庆节"),
    ("2011-10-02", "国庆节"),
    ("2011-10-03", "国庆节"),
    ("2011-10-04", "国庆节"),
    ("2011-10-05", "国庆节"),
    ("2011-10-06", "国庆节"),
    ("2011-10-07", "国庆节"),
    ("2012-01-01", "元旦"),
    ("2012-01-02", "元旦"),
    ("2012-01-03", "元旦"),
    ("2012-01-22", "春节"),
    ("2012-01-23", "春节"),
    ("2012-01-24", "春节"),
    ("2012-01-25", "春节"),
    ("2012-01-26", "春节"),
    ("2012-01-27", "春节"),
    ("2012-01-28", "春节"),
    ("2012-04-02", "清明节"),
    ("2012-04-03", "清明节"),
    ("2012-04-04", "清明节"),
    ("2012-04-29", "劳动节"),
    ("2012-04-30", "劳动节"),
    ("2012-05-01", "劳动节"),
    ("2012-06-22", "端午节"),
    ("2012-06-23", "端午节"),
    ("2012-06-24", "端午节"),
    ("2012-09-30", "中秋节"),
    ("2012-10-01", "国庆节"),
    ("2012-10-02", "国庆节"),
    ("2012-10-03", "国庆节"),
    ("2012-10-04", "国庆节"),
    ("2012-10-05", "国庆节"),
    ("2012-10-06", "国庆节"),
    ("2012-10-07", "国庆节"),
    ("2012-10-08", "国庆节"),
    ("2013-01-01", "元旦"),
    ("2013-01-02", "元旦"),
    ("2013-01-03", "元旦"),
    ("2013-02-09", "春节"),
    ("2013-02-10", "春节"),
    ("2013-02-11", "春节"),
    ("2013-02-12", "春节"),
    ("2013-02-13", "春节"),
    ("2013-02-14", "春节"),
    ("2013-02-15", "春节"),
    ("2013-04-04", "清明节"),
    ("2013-04-05", "清明节"),
    ("2013-04-06", "清明节"),
    ("2013-04-29", "劳动节"),
    ("2013-04-30", "劳动节"),
    ("2013-05-01", "劳动节"),
    ("2013-06-10", "端午节"),
    ("2013-06-11", "端午节"),
    ("2013-06-12", "端午节"),
    ("2013-09-19", "中秋节"),
    ("2013-09-20", "中秋节"),
    ("2013-09-21", "中秋节"),
    ("2013-10-01", "国庆节"),
    ("2013-10-02", "国庆节"),
    ("2013-10-03", "国庆节"),
    ("2013-10-04", "国庆节"),
    ("2013-10-05", "国庆节"),
    ("2013-10-06", "国庆节"),
    ("2013-10-07", "国庆节"),
    ("2014-01-01", "元旦"),
    ("2014-01-31", "春节"),
    ("2014-02-01", "春节"),
    ("2014-02-02", "春节"),
    ("2014-02-03", "春节"),
    ("2014-02-04", "春节"),
    ("2014-02-05", "春节"),
    ("2014-02-06", "春节"),
    ("2014-04-05", "清明节"),
    ("2014-04-06", "清明节"),
    ("2014-04-07", "清明节"),
    ("2014-05-01", "劳动节"),
    ("2014-05-02", "劳动节"),
    ("2014-05-03", "劳动节"),
    ("2014-06-02", "端午节"),
    ("2014-06-03", "端午节"),
    ("2014-06-04", "端午节"),
    ("2014-09-08", "中秋节"),
    ("2014-09-09", "中秋节"),
    ("2014-09-10", "中秋节"),
    ("2014-10-01", "国庆节"),
    ("2014-10-02", "国庆节"),
    ("2014-10-03", "国庆节"),
    ("2014-10-04", "国庆节"),
    ("2014-10-05", "国庆节"),
    ("2014-10-06", "国庆节"),
    ("2014-10-07", "国庆节"),
    ("2015-01-01", "元旦"),
    ("2015-01-02", "元旦"),
    ("2015-01-03", "元旦"),
    ("2015-02-18", "春节"),
    ("2015-02-19", "春节"),
    ("2015-02-20", "春节"),
    ("2015-02-21", "春节"),
    ("2015-02-22", "春节"),
    ("2015-02-23", "春节"),
    ("2015-02-24", "春节"),
    ("2015-04-04", "清明节"),
    ("2015-04-05", "清明节"),
    ("2015-04-06", "清明节"),
    ("2015-05-01", "劳动节"),
    ("2015-05-02", "劳动节"),
    ("2015-05-03", "劳动节"),
    ("2015-06-20", "端午节"),
    ("2015-06-21", "端午节"),
    ("2015-06-22", "端午节"),
    ("2015-09-26", "中秋节"),
    ("2015-09-27", "中秋节"),
    ("2015-10-01", "国庆节"),
    ("2015-10-02", "国庆节"),
    ("2015-10-03", "国庆节"),
    ("2015-10-04", "国庆节"),
    ("2015-10-05", "国庆节"),
    ("2015-10-06", "国庆节"),
    ("2015-10-07", "国庆节"),
    ("2016-01-01", "元旦"),
    ("2016-01-02", "元旦"),
    ("2016-01-03", "元旦"),
    ("2016-02-07", "春节"),
    ("2016-02-08", "春节"),
    ("2016-02-09", "春节"),
    ("2016-02-10", "春节"),
    ("2016-02-11", "春节"),
    ("2016-02-12", "春节"),
    ("2016-02-13", "春节"),
    ("2016-04-02", "清明节"),
    ("2016-04-03", "清明节"),
    ("2016-04-04", "清明节"),
    ("2016-04-30", "劳动节"),
    ("2016-05-01", "劳动节"),
    ("2016-05-02", "劳动节"),
    ("2016-06-09", "端午节"),
    ("2016-06-10", "端午节"),
    ("2016-06-11", "端午节"),
    ("2016-09-15", "中秋节"),
    ("2016-09-16", "中秋节"),
    ("2016-09-17", "中秋节"),
    ("2016-10-01", "国庆节"),
    ("2016-10-02", "国庆节"),
    ("2016-10-03", "国庆节"),
    ("2016-10-04", "国庆节"),
    ("2016-10-05", "国庆节"),
    ("2016-10-06", "国庆节"),
    ("2016-10-07", "国庆节"),
    ("2017-01-01", "元旦"),
    ("2017-01-02", "元旦"),
    ("2017-01-27", "春节"),
    ("2017-01-28", "春节"),
    ("2017-01-29", "春节"),
    ("2017-01-30", "春节"),
    ("2017-01-31", "春节"),
    ("2017-02-01", "春节"),
    ("2017-02-02", "春节"),
    ("2017-04-02", "清明节"),
    ("2017-04-03", "清明节"),
    ("2017-04-04", "清明节"),
    ("2017-04-29", "劳动节"),
    ("2017-04-30", "劳动节"),
    ("2017-05-01", "劳动节"),
    ("2017-05-28", "端午节"),
    ("2017-05-29", "端午节"),
    ("2017-05-30", "端午节"),
    ("2017-10-01", "国庆节"),
    ("2017-10-02", "国庆节"),
    ("2017-10-03", "国庆节"),
    ("2017-10-04", "国庆节"),
    ("2017-10-05", "国庆节"),
    ("2017-10-06", "国庆节"),
    ("2017-10-07", "国庆节"),
    ("2017-10-08", "国庆节"),
    ("2018-02-15", "春节"),
    ("2018-02-16", "春节"),
    ("2018-02-17", "春节"),
    ("2018-02-18", "春节"),
    ("2018-02-19", "春节"),
    ("2018-02-20", "春节"),
    ("2018-02-21", "春节"),
    ("2018-04-05", "清明节"),
    ("2018-04-06", "清明节"),
    ("2018-04-07", "清明节"),
    ("2018-04-29", "劳动节"),
    ("2018-04-30", "劳动节"),
    ("2018-05-01", "劳动节"),
    ("2018-06-18", "端午节"),
    ("2018-09-24", "中秋节"),
    ("2018-10-01", "国庆节"),
    ("2018-10-02", "国庆节"),
    ("2018-10-03", "国庆节"),
    ("2018-10-04", "国庆节"),
    ("2018-10-05", "国庆节"),
    ("2018-10-06", "国庆节"),
    ("2018-10-07", "国庆节"),
    ("2018-12-30", "元旦"),
    ("2018-12-31", "元旦"),
    ("2019-01-01", "元旦"),
    ("2019-02-04", "春节"),
    ("2019-02-05", "春节"),
    ("2019-02-06", "春节"),
    ("2019-02-07", "春节"),
    ("2019-02-08", "春节"),
    ("2019-02-09", "春节"),
    ("2019-02-10", "春节"),
    ("2019-04-05", "清明节"),
    ("2019-04-06", "清明节"),
    ("2019-04-07", "清明节"),
    ("2019-05-01", "劳动节"),
    ("2019-05-02", "劳动节"),
    ("2019-05-03", "劳动节"),
    ("2019-05-04", "劳动节"),
    ("2019-06-07", "端午节"),
    ("2019-06-08", "端午节"),
    ("2019-06-09", "端午节"),
    ("2019-09-13", "中秋节"),
    ("2019-09-14", "中秋节"),
    ("2019-09-15", "中秋节"),
    ("2019-10-01", "国庆节"),
    ("2019-10-02", "国庆节"),
    ("2019-10-03", "国庆节"),
    ("2019-10-04", "国庆节"),
    ("2019-10-05", "国庆节"),
    ("2019-10-06", "国庆节"),
    ("2019-10-07", "国庆节"),
    ("2020-01-01", "元旦"),
    ("2020-01-24", "春节"),
    ("2020-01-25", "春节"),
    ("2020-01-26", "春节"),
    ("2020-01-27", "春节"),
    ("2020-01-28", "春节"),
    ("2020-01-29", "春节"),
    ("2020-01-30", "春节"),
    ("2020-04-04", "清明节"),
    ("2020-04-05", "清明节"),
    ("2020-04-06", "清明节"),
    ("2020-05-01", "劳动节"),
    ("2020-05-02", "劳动节"),
    ("2020-05-03", "劳动节"),
    ("2020-05-04", "劳动节"),
    ("2020-05-05", "劳动节"),
    ("2020-06-25", "端午节"),
    ("2020-06-26", "端午节"),
    ("2020-06-27", "端午节"),
    ("2020-10-01", "国庆节"),
    ("2020-10-02", "国庆节"),
    ("2020-10-03", "国庆节"),
    ("2020-10-04", "国庆节"),
    ("2020-10-05", "国庆节"),
    ("2020-10-06", "国庆节"),
    ("2020-10-07", "国庆节"),
    ("2020-10-08", "国庆节"),
    ("2021-01-01", "元旦"),
    ("2021-02-11", "春节"),
    ("2021-02-12", "春节"),
    ("2021-02-13", "春节"),
    ("2021-02-14", "春节"),
    ("2021-02-15", "春节"),
    ("2021-02-16", "春节"),
    ("2021-02-17", "春节"),
    ("2021-04-03", "清明节"),
    ("2021-04-04", "清明节"),
    ("2021-04-05", "清明节"),
    ("2021-05-01", "劳动节"),
    ("2021-05-02", "劳动节"),
    ("2021-05-03", "劳动节"),
    ("2021-05-04", "劳动节"),
    ("2021-05-05", "劳动节"),
    ("2021-06-12", "端午节"),
    ("2021-06-13", "端午节"),
    ("2021-06-14", "端午节"),
    ("2021-09-19", "中秋节"),
    ("2021-09-20", "中秋节"),
    ("2021-09-21", "中秋节"),
    ("2021-10-01", "国庆节"),
    ("2021-10-02", "国庆节"),
    ("2021-10-03", "国庆节"),
    ("2021-10-04", "国庆节"),
    ("2021-10-05", "国庆节"),
    ("2021-10-06", "国庆节"),
    ("2021-10-07", "国庆节"),
    ("2022-01-01", "元旦"),
    ("2022-01-02", "元旦"),
    ("2022-01-03", "元旦"),
    ("2022-01-31", "春节"),
    ("2022-02-01", "春节"),
    ("2022-02-02", "春节"),
    ("2022-02-03", "春节"),
    ("2022-02-04", "春节"),
    ("2022-02-05", "春节"),
    ("2022-02-06", "春节"),
    ("2022-04-03", "清明节"),
    ("2022-04-04", "清明节"),
    ("2022-04-05", "清明节"),
    ("2022-04-30", "劳动节"),
    ("2022-05-01", "劳动节"),
    ("2022-05-02", "劳动节"),
    ("2022-05-03", "劳动节"),
    ("2022-05-04", "劳动节"),
    ("2022-06-03", "端午节"),
    ("2022-06-04", "端午节"),
    ("2022-06-05", "端午节"),
    ("2022-09-10", "中秋节"),
    ("2022-09-11", "中秋节"),
    ("2022-09-12", "中秋节"),
    ("2022-10-01", "国庆节"),
    ("2022-10-02", "国庆节"),
    ("2022-10-03", "国庆节"),
    ("2022-10-04", "国庆节"),
    ("2022-10-05", "国庆节"),
    ("2022-10-06", "国庆节"),
    ("2022-10-07", "国庆节"),
    ("2022-12-31", "元旦"),
    ("2023-01-01", "元旦"),
    ("2023-01-02", "元旦"),
    ("2023-01-03", "元旦"),
    ("2023-01-21", "春节"),
    ("2023-01-22", "春节"),
    ("2023-01-23", "春节"),
    ("2023-01-24", "春节"),
    ("2023-01-25", "春节"),
    ("2023-01-26", "春节"),
    ("2023-01-27", "春节"),
    ("2023-04-05", "清明节"),
    ("2023-04-29", "劳动节"),
    ("2023-04-30", "劳动节"),
    ("2023-05-01", "劳动节"),
    ("2023-05-02", "劳动节"),
    ("2023-05-03", "劳动节"),
    ("2023-06-22", "端午节"),
    ("2023-06-23", "端午节"),
    ("2023-06-24", "端午节"),
    ("2023-09-29", "中秋节"),
    ("2023-09-30", "中秋节"),
    ("2023-10-01", "国庆节"),
    ("2023-10-02", "国庆节"),
    ("2023-10-03", "国庆节"),
    ("2023-10-04", "国庆节"),
    ("2023-10-05", "国庆节"),
    ("2023-10-06", "国庆节"),
    ("2024-01-01", "元旦"),
    ("2024-02-10", "春节"),
    ("2024-02-11", "春节"),
    ("2024-02-12", "春节"),
    ("2024-02-13", "春节"),
    ("2024-02-14", "春节"),
    ("2024-02-15", "春节"),
    ("2024-02-16", "春节"),
    ("2024-02-17", "春节"),
    ("2024-04-04", "清明节"),
    ("2024-04-05", "清明节"),
    ("2024-04-06", "清明节"),
    ("2024-05-01", "劳动节"),
    ("2024-05-02", "劳动节"),
    ("2024-05-03", "劳动节"),
    ("2024-05-04", "劳动节"),
    ("2024-05-05", "劳动节"),
    ("2024-06-10", "端午节"),
    ("2024-09-15", "中秋节"),
    ("2024-09-16", "中秋节"),
    ("2024-09-17", "中秋节"),
    ("2024-10-01", "国庆节"),
    ("2024-10-02", "国庆节"),
    ("2024-10-03", "国庆节"),
    ("2024-10-04", "国庆节"),
    ("2024-10-05", "国庆节"),
    ("2024-10-06", "国庆节"),
    ("2024-10-07", "国庆节"),
    ("2025-01-01", "元旦"),
    ("2025-01-28", "春节"),
    ("2025-01-29", "春节"),
    ("2025-01-30", "春节"),
    ("2025-01-31", "春节"),
    ("2025-02-01", "春节"),
    ("2025-02-02", "春节"),
    ("2025-02-03", "春节"),
    ("2025-02-04", "春节"),
    ("2025-04-04", "清明节"),
    ("2025-04-05", "清明节"),
    ("2025-04-06", "清明节"),
    ("2025-05-01", "劳动节"),
    ("2025-05-02", "劳动节"),
    ("2025-05-03", "劳动节"),
    ("2025-05-04", "劳动节"),
    ("2025-05-05", "劳动节"),
    ("2025-05-31", "端午节"),
    ("2025-06-01", "端午节"),
    ("2025-06-02", "端午节"),
    ("2025-10-01", "国庆节"),
    ("2025-10-02", "国庆节"),
    ("2025-10-03", "国庆节"),
    ("2025-10-04", "国庆节"),
    ("2025-10-05", "国庆节"),
    ("2025-10-06", "国庆节"),
    ("2025-10-07", "国庆节"),
    ("2025-10-08", "国庆节"),
    ("2026-01-01", "元旦"),
    ("2026-01-02", "元旦"),
    ("2026-01-03", "元旦"),
    ("2026-02-15", "春节"),
    ("2026-02-16", "春节"),
    ("2026-02-17", "春节"),
    ("2026-02-18", "春节"),
    ("2026-02-19", "春节"),
    ("2026-02-20", "春节"),
    ("2026-02-21", "春节"),
    ("2026-02-22", "春节"),
    ("2026-02-23", "春节"),
    ("2026-04-04", "清明节"),
    ("2026-04-05", "清明节"),
    ("2026-04-06", "清明节"),
    ("2026-05-01", "劳动节"),
    ("2026-05-02", "劳动节"),
    ("2026-05-03", "劳动节"),
    ("2026-05-04", "劳动节"),
    ("2026-05-05", "劳动节"),
    ("2026-06-19", "端午节"),
    ("2026-06-20", "端午节"),
    ("2026-06-21", "端午节"),
    ("2026-09-25", "中秋节"),
    ("2026-09-26", "中秋节"),
    ("2026-09-27", "中秋节"),
    ("2026-10-01", "国庆节"),
    ("2026-10-02", "国庆节"),
    ("2026-10-03", "国庆节"),
    ("2026-10-04", "国庆节"),
    ("2026-10-05", "国庆节"),
    ("2026-10-06", "国庆节"),
    ("2026-10-07", "国庆节"),
];

/// Weekend days redesignated as workdays, labelled with the holiday they compensate.
pub(crate) static SHIFTED_WORKDAYS: &[(&str, &str)] = &[
    ("2011-01-29", "补春节"),
    ("2011-01-30", "补春节"),
    ("2011-10-08", "补国庆节"),
    ("2011-10-09", "补国庆节"),
    ("2012-01-21", "补春节"),
    ("2012-09-29", "补国庆节"),
    ("2012-09-30", "补国庆节"),
    ("2013-01-05", "补元旦"),
    ("2013-01-06", "补元旦"),
    ("2013-02-16", "补春节"),
    ("2013-02-17", "补春节"),
    ("2013-09-22", "补中秋国庆"),
    ("2013-09-29", "补中秋国庆"),
    ("2013-12-29", "补元旦"),
    ("2014-01-26", "补春节"),
    ("2014-02-08", "补春节"),
    ("2014-05-04", "补劳动节"),
    ("2014-09-28", "补国庆节"),
    ("2015-01-04", "补元旦"),
    ("2015-02-15", "补春节"),
    ("2015-02-28", "补春节"),
    ("2015-09-06", "补抗战胜利"),
    ("2015-10-10", "补国庆节"),
    ("2016-02-06", "补春节"),
    ("2016-02-14", "补春节"),
    ("2016-06-12", "补端午节"),
    ("2016-09-18", "补中秋节"),
    ("2016-10-08", "补国庆节"),
    ("2016-10-09", "补国庆节"),
    ("2017-01-22", "补春节"),
    ("2017-02-04", "补春节"),
    ("2017-04-01", "补清明节"),
    ("2017-05-27", "补端午节"),
    ("2017-09-30", "补国庆节"),
    ("2018-02-11", "补春节"),
    ("2018-02-24", "补春节"),
    ("2018-04-08", "补清明节"),
    ("2018-04-28", "补劳动节"),
    ("2018-09-29", "补国庆节"),
    ("2018-09-30", "补国庆节"),
    ("2018-12-29", "补元旦"),
    ("2019-02-02", "补春节"),
    ("2019-02-03", "补春节"),
    ("2019-04-28", "补劳动节"),
    ("2019-05-05", "补劳动节"),
    ("2019-09-29", "补国庆节"),
    ("2019-10-12", "补国庆节"),
    ("2020-01-19", "补春节"),
    ("2020-02-01", "补春节"),
    ("2020-04-26", "补劳动节"),
    ("2020-05-09", "补劳动节"),
    ("2020-06-28", "补端午节"),
    ("2020-09-27", "补国庆节"),
    ("2020-10-10", "补国庆节"),
    ("2021-02-07", "补春节"),
    ("2021-02-20", "补春节"),
    ("2021-04-25", "补劳动节"),
    ("2021-05-08", "补劳动节"),
    ("2021-09-18", "补中秋节"),
    ("2021-09-26", "补国庆节"),
    ("2021-10-09", "补国庆节"),
    ("2022-01-29", "补春节"),
    ("2022-01-30", "补春节"),
    ("2022-04-02", "补清明节"),
    ("2022-04-24", "补劳动节"),
    ("2022-05-07", "补劳动节"),
    ("2022-10-08", "补国庆节"),
    ("2022-10-09", "补国庆节"),
    ("2023-01-28", "补春节"),
    ("2023-01-29", "补春节"),
    ("2023-04-23", "补劳动节"),
    ("2023-05-06", "补劳动节"),
    ("2023-06-25", "补端午节"),
    ("2023-10-07", "补国庆节"),
    ("2023-10-08", "补国庆节"),
    ("2024-02-04", "补春节"),
    ("2024-02-18", "补春节"),
    ("2024-04-07", "补清明节"),
    ("2024-04-28", "补劳动节"),
    ("2024-05-11", "补劳动节"),
    ("2024-09-14", "补中秋节"),
    ("2024-09-29", "补国庆节"),
    ("2024-10-12", "补国庆节"),
    ("2025-01-26", "补春节"),
    ("2025-02-08", "补春节"),
    ("2025-04-27", "补劳动节"),
    ("2025-09-28", "补国庆节"),
    ("2025-10-11", "补国庆节"),
    ("2026-01-04", "补元旦"),
    ("2026-02-14", "补春节"),
    ("2026-02-28", "补春节"),
    ("2026-05-09", "补劳动节"),
    ("2026-09-20", "补国庆节"),
    ("2026-10-10", "补国庆节"),
];

/// Gregorian date of the first day of the first lunar month, per Gregorian year.
pub(crate) static LUNAR_NEW_YEAR: &[(i32, u32, u32)] = &[
    (2011, 2, 3),
    (2012, 1, 23),
    (2013, 2, 10),
    (2014, 1, 31),
    (2015, 2, 19),
    (2016, 2, 8),
    (2017, 1, 28),
    (2018, 2, 16),
    (2019, 2, 5),
    (2020, 1, 25),
    (2021, 2, 12),
    (2022, 2, 1),
    (2023, 1, 22),
    (2024, 2, 10),
    (2025, 1, 29),
    (2026, 2, 17),
];
