//! Built-in lunisolar table, lunar years 1900 through 2100.
//!
//! Each entry packs one year as published in the common 1900-2100 lunar
//! tables:
//!
//! - bits 0-3: leap month number, 0 when the year has none
//! - bits 4-15: month 12 up to month 1, set for a 30-day month
//! - bit 16: set when the leap month has 30 days
//!
//! The Gregorian first day of every year is written out next to it so the
//! load-time check compares the month lengths against an independent span
//! instead of a running sum.

use super::YearRecord;

/// Day after the last day covered by [`YEARS`] (first day of lunar 2101).
pub const TABLE_END: (u16, u8, u8) = (2101, 1, 29);

#[rustfmt::skip]
pub static YEARS: [YearRecord; 201] = [
    YearRecord::from_packed(1900, 0x04bd8, (1900, 1, 31)),
    YearRecord::from_packed(1901, 0x04ae0, (1901, 2, 19)),
    YearRecord::from_packed(1902, 0x0a570, (1902, 2, 8)),
    YearRecord::from_packed(1903, 0x054d5, (1903, 1, 29)),
    YearRecord::from_packed(1904, 0x0d260, (1904, 2, 16)),
    YearRecord::from_packed(1905, 0x0d950, (1905, 2, 4)),
    YearRecord::from_packed(1906, 0x16554, (1906, 1, 25)),
    YearRecord::from_packed(1907, 0x056a0, (1907, 2, 13)),
    YearRecord::from_packed(1908, 0x09ad0, (1908, 2, 2)),
    YearRecord::from_packed(1909, 0x055d2, (1909, 1, 22)),
    YearRecord::from_packed(1910, 0x04ae0, (1910, 2, 10)),
    YearRecord::from_packed(1911, 0x0a5b6, (1911, 1, 30)),
    YearRecord::from_packed(1912, 0x0a4d0, (1912, 2, 18)),
    YearRecord::from_packed(1913, 0x0d250, (1913, 2, 6)),
    YearRecord::from_packed(1914, 0x1d255, (1914, 1, 26)),
    YearRecord::from_packed(1915, 0x0b540, (1915, 2, 14)),
    YearRecord::from_packed(1916, 0x0d6a0, (1916, 2, 3)),
    YearRecord::from_packed(1917, 0x0ada2, (1917, 1, 23)),
    YearRecord::from_packed(1918, 0x095b0, (1918, 2, 11)),
    YearRecord::from_packed(1919, 0x14977, (1919, 2, 1)),
    YearRecord::from_packed(1920, 0x04970, (1920, 2, 20)),
    YearRecord::from_packed(1921, 0x0a4b0, (1921, 2, 8)),
    YearRecord::from_packed(1922, 0x0b4b5, (1922, 1, 28)),
    YearRecord::from_packed(1923, 0x06a50, (1923, 2, 16)),
    YearRecord::from_packed(1924, 0x06d40, (1924, 2, 5)),
    YearRecord::from_packed(1925, 0x1ab54, (1925, 1, 24)),
    YearRecord::from_packed(1926, 0x02b60, (1926, 2, 13)),
    YearRecord::from_packed(1927, 0x09570, (1927, 2, 2)),
    YearRecord::from_packed(1928, 0x052f2, (1928, 1, 23)),
    YearRecord::from_packed(1929, 0x04970, (1929, 2, 10)),
    YearRecord::from_packed(1930, 0x06566, (1930, 1, 30)),
    YearRecord::from_packed(1931, 0x0d4a0, (1931, 2, 17)),
    YearRecord::from_packed(1932, 0x0ea50, (1932, 2, 6)),
    YearRecord::from_packed(1933, 0x16a95, (1933, 1, 26)),
    YearRecord::from_packed(1934, 0x05ad0, (1934, 2, 14)),
    YearRecord::from_packed(1935, 0x02b60, (1935, 2, 4)),
    YearRecord::from_packed(1936, 0x186e3, (1936, 1, 24)),
    YearRecord::from_packed(1937, 0x092e0, (1937, 2, 11)),
    YearRecord::from_packed(1938, 0x1c8d7, (1938, 1, 31)),
    YearRecord::from_packed(1939, 0x0c950, (1939, 2, 19)),
    YearRecord::from_packed(1940, 0x0d4a0, (1940, 2, 8)),
    YearRecord::from_packed(1941, 0x1d8a6, (1941, 1, 27)),
    YearRecord::from_packed(1942, 0x0b550, (1942, 2, 15)),
    YearRecord::from_packed(1943, 0x056a0, (1943, 2, 5)),
    YearRecord::from_packed(1944, 0x1a5b4, (1944, 1, 25)),
    YearRecord::from_packed(1945, 0x025d0, (1945, 2, 13)),
    YearRecord::from_packed(1946, 0x092d0, (1946, 2, 2)),
    YearRecord::from_packed(1947, 0x0d2b2, (1947, 1, 22)),
    YearRecord::from_packed(1948, 0x0a950, (1948, 2, 10)),
    YearRecord::from_packed(1949, 0x0b557, (1949, 1, 29)),
    YearRecord::from_packed(1950, 0x06ca0, (1950, 2, 17)),
    YearRecord::from_packed(1951, 0x0b550, (1951, 2, 6)),
    YearRecord::from_packed(1952, 0x15355, (1952, 1, 27)),
    YearRecord::from_packed(1953, 0x04da0, (1953, 2, 14)),
    YearRecord::from_packed(1954, 0x0a5b0, (1954, 2, 3)),
    YearRecord::from_packed(1955, 0x14573, (1955, 1, 24)),
    YearRecord::from_packed(1956, 0x052b0, (1956, 2, 12)),
    YearRecord::from_packed(1957, 0x0a9a8, (1957, 1, 31)),
    YearRecord::from_packed(1958, 0x0e950, (1958, 2, 18)),
    YearRecord::from_packed(1959, 0x06aa0, (1959, 2, 8)),
    YearRecord::from_packed(1960, 0x0aea6, (1960, 1, 28)),
    YearRecord::from_packed(1961, 0x0ab50, (1961, 2, 15)),
    YearRecord::from_packed(1962, 0x04b60, (1962, 2, 5)),
    YearRecord::from_packed(1963, 0x0aae4, (1963, 1, 25)),
    YearRecord::from_packed(1964, 0x0a570, (1964, 2, 13)),
    YearRecord::from_packed(1965, 0x05260, (1965, 2, 2)),
    YearRecord::from_packed(1966, 0x0f263, (1966, 1, 21)),
    YearRecord::from_packed(1967, 0x0d950, (1967, 2, 9)),
    YearRecord::from_packed(1968, 0x05b57, (1968, 1, 30)),
    YearRecord::from_packed(1969, 0x056a0, (1969, 2, 17)),
    YearRecord::from_packed(1970, 0x096d0, (1970, 2, 6)),
    YearRecord::from_packed(1971, 0x04dd5, (1971, 1, 27)),
    YearRecord::from_packed(1972, 0x04ad0, (1972, 2, 15)),
    YearRecord::from_packed(1973, 0x0a4d0, (1973, 2, 3)),
    YearRecord::from_packed(1974, 0x0d4d4, (1974, 1, 23)),
    YearRecord::from_packed(1975, 0x0d250, (1975, 2, 11)),
    YearRecord::from_packed(1976, 0x0d558, (1976, 1, 31)),
    YearRecord::from_packed(1977, 0x0b540, (1977, 2, 18)),
    YearRecord::from_packed(1978, 0x0b6a0, (1978, 2, 7)),
    YearRecord::from_packed(1979, 0x195a6, (1979, 1, 28)),
    YearRecord::from_packed(1980, 0x095b0, (1980, 2, 16)),
    YearRecord::from_packed(1981, 0x049b0, (1981, 2, 5)),
    YearRecord::from_packed(1982, 0x0a974, (1982, 1, 25)),
    YearRecord::from_packed(1983, 0x0a4b0, (1983, 2, 13)),
    YearRecord::from_packed(1984, 0x0b27a, (1984, 2, 2)),
    YearRecord::from_packed(1985, 0x06a50, (1985, 2, 20)),
    YearRecord::from_packed(1986, 0x06d40, (1986, 2, 9)),
    YearRecord::from_packed(1987, 0x0af46, (1987, 1, 29)),
    YearRecord::from_packed(1988, 0x0ab60, (1988, 2, 17)),
    YearRecord::from_packed(1989, 0x09570, (1989, 2, 6)),
    YearRecord::from_packed(1990, 0x04af5, (1990, 1, 27)),
    YearRecord::from_packed(1991, 0x04970, (1991, 2, 15)),
    YearRecord::from_packed(1992, 0x064b0, (1992, 2, 4)),
    YearRecord::from_packed(1993, 0x074a3, (1993, 1, 23)),
    YearRecord::from_packed(1994, 0x0ea50, (1994, 2, 10)),
    YearRecord::from_packed(1995, 0x06b58, (1995, 1, 31)),
    YearRecord::from_packed(1996, 0x05ac0, (1996, 2, 19)),
    YearRecord::from_packed(1997, 0x0ab60, (1997, 2, 7)),
    YearRecord::from_packed(1998, 0x096d5, (1998, 1, 28)),
    YearRecord::from_packed(1999, 0x092e0, (1999, 2, 16)),
    YearRecord::from_packed(2000, 0x0c960, (2000, 2, 5)),
    YearRecord::from_packed(2001, 0x0d954, (2001, 1, 24)),
    YearRecord::from_packed(2002, 0x0d4a0, (2002, 2, 12)),
    YearRecord::from_packed(2003, 0x0da50, (2003, 2, 1)),
    YearRecord::from_packed(2004, 0x07552, (2004, 1, 22)),
    YearRecord::from_packed(2005, 0x056a0, (2005, 2, 9)),
    YearRecord::from_packed(2006, 0x0abb7, (2006, 1, 29)),
    YearRecord::from_packed(2007, 0x025d0, (2007, 2, 18)),
    YearRecord::from_packed(2008, 0x092d0, (2008, 2, 7)),
    YearRecord::from_packed(2009, 0x0cab5, (2009, 1, 26)),
    YearRecord::from_packed(2010, 0x0a950, (2010, 2, 14)),
    YearRecord::from_packed(2011, 0x0b4a0, (2011, 2, 3)),
    YearRecord::from_packed(2012, 0x0baa4, (2012, 1, 23)),
    YearRecord::from_packed(2013, 0x0ad50, (2013, 2, 10)),
    YearRecord::from_packed(2014, 0x055d9, (2014, 1, 31)),
    YearRecord::from_packed(2015, 0x04ba0, (2015, 2, 19)),
    YearRecord::from_packed(2016, 0x0a5b0, (2016, 2, 8)),
    YearRecord::from_packed(2017, 0x15176, (2017, 1, 28)),
    YearRecord::from_packed(2018, 0x052b0, (2018, 2, 16)),
    YearRecord::from_packed(2019, 0x0a930, (2019, 2, 5)),
    YearRecord::from_packed(2020, 0x07954, (2020, 1, 25)),
    YearRecord::from_packed(2021, 0x06aa0, (2021, 2, 12)),
    YearRecord::from_packed(2022, 0x0ad50, (2022, 2, 1)),
    YearRecord::from_packed(2023, 0x05b52, (2023, 1, 22)),
    YearRecord::from_packed(2024, 0x04b60, (2024, 2, 10)),
    YearRecord::from_packed(2025, 0x0a6e6, (2025, 1, 29)),
    YearRecord::from_packed(2026, 0x0a4e0, (2026, 2, 17)),
    YearRecord::from_packed(2027, 0x0d260, (2027, 2, 6)),
    YearRecord::from_packed(2028, 0x0ea65, (2028, 1, 26)),
    YearRecord::from_packed(2029, 0x0d530, (2029, 2, 13)),
    YearRecord::from_packed(2030, 0x05aa0, (2030, 2, 3)),
    YearRecord::from_packed(2031, 0x076a3, (2031, 1, 23)),
    YearRecord::from_packed(2032, 0x096d0, (2032, 2, 11)),
    YearRecord::from_packed(2033, 0x04afb, (2033, 1, 31)),
    YearRecord::from_packed(2034, 0x04ad0, (2034, 2, 19)),
    YearRecord::from_packed(2035, 0x0a4d0, (2035, 2, 8)),
    YearRecord::from_packed(2036, 0x1d0b6, (2036, 1, 28)),
    YearRecord::from_packed(2037, 0x0d250, (2037, 2, 15)),
    YearRecord::from_packed(2038, 0x0d520, (2038, 2, 4)),
    YearRecord::from_packed(2039, 0x0dd45, (2039, 1, 24)),
    YearRecord::from_packed(2040, 0x0b5a0, (2040, 2, 12)),
    YearRecord::from_packed(2041, 0x056d0, (2041, 2, 1)),
    YearRecord::from_packed(2042, 0x055b2, (2042, 1, 22)),
    YearRecord::from_packed(2043, 0x049b0, (2043, 2, 10)),
    YearRecord::from_packed(2044, 0x0a577, (2044, 1, 30)),
    YearRecord::from_packed(2045, 0x0a4b0, (2045, 2, 17)),
    YearRecord::from_packed(2046, 0x0aa50, (2046, 2, 6)),
    YearRecord::from_packed(2047, 0x1b255, (2047, 1, 26)),
    YearRecord::from_packed(2048, 0x06d20, (2048, 2, 14)),
    YearRecord::from_packed(2049, 0x0ada0, (2049, 2, 2)),
    YearRecord::from_packed(2050, 0x14b63, (2050, 1, 23)),
    YearRecord::from_packed(2051, 0x09370, (2051, 2, 11)),
    YearRecord::from_packed(2052, 0x049f8, (2052, 2, 1)),
    YearRecord::from_packed(2053, 0x04970, (2053, 2, 19)),
    YearRecord::from_packed(2054, 0x064b0, (2054, 2, 8)),
    YearRecord::from_packed(2055, 0x168a6, (2055, 1, 28)),
    YearRecord::from_packed(2056, 0x0ea50, (2056, 2, 15)),
    YearRecord::from_packed(2057, 0x06b20, (2057, 2, 4)),
    YearRecord::from_packed(2058, 0x1a6c4, (2058, 1, 24)),
    YearRecord::from_packed(2059, 0x0aae0, (2059, 2, 12)),
    YearRecord::from_packed(2060, 0x092e0, (2060, 2, 2)),
    YearRecord::from_packed(2061, 0x0d2e3, (2061, 1, 21)),
    YearRecord::from_packed(2062, 0x0c960, (2062, 2, 9)),
    YearRecord::from_packed(2063, 0x0d557, (2063, 1, 29)),
    YearRecord::from_packed(2064, 0x0d4a0, (2064, 2, 17)),
    YearRecord::from_packed(2065, 0x0da50, (2065, 2, 5)),
    YearRecord::from_packed(2066, 0x05d55, (2066, 1, 26)),
    YearRecord::from_packed(2067, 0x056a0, (2067, 2, 14)),
    YearRecord::from_packed(2068, 0x0a6d0, (2068, 2, 3)),
    YearRecord::from_packed(2069, 0x055d4, (2069, 1, 23)),
    YearRecord::from_packed(2070, 0x052d0, (2070, 2, 11)),
    YearRecord::from_packed(2071, 0x0a9b8, (2071, 1, 31)),
    YearRecord::from_packed(2072, 0x0a950, (2072, 2, 19)),
    YearRecord::from_packed(2073, 0x0b4a0, (2073, 2, 7)),
    YearRecord::from_packed(2074, 0x0b6a6, (2074, 1, 27)),
    YearRecord::from_packed(2075, 0x0ad50, (2075, 2, 15)),
    YearRecord::from_packed(2076, 0x055a0, (2076, 2, 5)),
    YearRecord::from_packed(2077, 0x0aba4, (2077, 1, 24)),
    YearRecord::from_packed(2078, 0x0a5b0, (2078, 2, 12)),
    YearRecord::from_packed(2079, 0x052b0, (2079, 2, 2)),
    YearRecord::from_packed(2080, 0x0b273, (2080, 1, 22)),
    YearRecord::from_packed(2081, 0x06930, (2081, 2, 9)),
    YearRecord::from_packed(2082, 0x07337, (2082, 1, 29)),
    YearRecord::from_packed(2083, 0x06aa0, (2083, 2, 17)),
    YearRecord::from_packed(2084, 0x0ad50, (2084, 2, 6)),
    YearRecord::from_packed(2085, 0x14b55, (2085, 1, 26)),
    YearRecord::from_packed(2086, 0x04b60, (2086, 2, 14)),
    YearRecord::from_packed(2087, 0x0a570, (2087, 2, 3)),
    YearRecord::from_packed(2088, 0x054e4, (2088, 1, 24)),
    YearRecord::from_packed(2089, 0x0d160, (2089, 2, 10)),
    YearRecord::from_packed(2090, 0x0e968, (2090, 1, 30)),
    YearRecord::from_packed(2091, 0x0d520, (2091, 2, 18)),
    YearRecord::from_packed(2092, 0x0daa0, (2092, 2, 7)),
    YearRecord::from_packed(2093, 0x16aa6, (2093, 1, 27)),
    YearRecord::from_packed(2094, 0x056d0, (2094, 2, 15)),
    YearRecord::from_packed(2095, 0x04ae0, (2095, 2, 5)),
    YearRecord::from_packed(2096, 0x0a9d4, (2096, 1, 25)),
    YearRecord::from_packed(2097, 0x0a2d0, (2097, 2, 12)),
    YearRecord::from_packed(2098, 0x0d150, (2098, 2, 1)),
    YearRecord::from_packed(2099, 0x0f252, (2099, 1, 21)),
    YearRecord::from_packed(2100, 0x0d520, (2100, 2, 9)),
];
