//! Embedded demo data: the six-zone Lagos pilot table and a small working
//! set of businesses hand-placed around its centroids.

/// Zone table in tie-break order, one row per zone.
pub const ZONES_CSV: &str = "\
zone,region,lat,lon\n\
A,Ikeja,6.6018,3.3515\n\
B,Surulere,6.5003,3.3545\n\
C,Lekki,6.4698,3.5852\n\
D,Yaba,6.5244,3.3792\n\
E,Victoria Island,6.4281,3.4219\n\
F,Ajah,6.4671,3.6038\n\
";

/// Thirteen businesses across all six zones.  `registered` marks the
/// anchors the field team has already visited; zones A, C, and D each have
/// one, the rest have none.
pub const BUSINESSES_CSV: &str = "\
id,name,lat,lon,registered\n\
1,Allen Avenue Pharmacy,6.6050,3.3560,true\n\
2,Computer Village Repairs,6.5930,3.3420,false\n\
3,Oba Akran Print Shop,6.6100,3.3450,false\n\
4,Adeniran Ogunsanya Fabrics,6.4950,3.3560,false\n\
5,Ojuelegba Tyre Centre,6.5090,3.3660,false\n\
6,Herbert Macaulay Cafe,6.5330,3.3850,true\n\
7,Tejuosho Yard Goods,6.5150,3.3710,false\n\
8,Bar Beach Electronics,6.4270,3.4280,false\n\
9,Lekki Phase 1 Pharmacy,6.4730,3.5810,true\n\
10,Elegushi Beach Grill,6.4560,3.5700,false\n\
11,Jakande Market Stall,6.4420,3.5310,false\n\
12,Ajah Market Chemist,6.4700,3.6100,false\n\
13,Badore Road Bakery,6.4850,3.6200,false\n\
";
