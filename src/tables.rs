//! Lookup tables for the MHash-384 transition and finalization steps.
//!
//! The payload is carried as Base64 rows (one row per table index) and
//! decoded once, on first access, into native little-endian words. A
//! payload that fails shape or range validation aborts the process:
//! every digest this build could produce would be wrong.

use lazy_static::lazy_static;

/// Initial state vector, one row of six words.
const ROW_INI: &str = "0wijhYhqPyREc3ADLooZE9AxnykiOAmkiWxO7Jj6Lgh3E9A45iEoRWwM6TTPZlS+";

/// Finalization byte-selector sequence, 48 entries in one row.
const ROW_FIN: &str = "ExkVGwARCBosHhINHA4XJhQqHQMgLQEfBSQGEC4nCQcWKAsEIg8pGCEKLwwrJQIj";

/// Per-round XOR words. Rows 0..=255 are keyed by input byte value;
/// row 256 seeds the finalization feedback chain.
const ROWS_XOR: [&str; 257] = [
    /*000*/ "NzBLQQDf3AH4lo4bZq+zsSExOdtzKE2UVecqZjaa2nOxVstOjDFPH7ylKpzZQ5fw",
    /*001*/ "VMm/y8a7H6jb7VmJZEPeOS+CAdoLGmQaWCaTZnJgLrWEIICsMRdbLNSdxx9nEO/C",
    /*002*/ "RgCBCI6NKs/2aOKJIJt+i+wtXSxlYQSTuci/IyLklvBwCf5MljjTjb1g7HwvNJwm",
    /*003*/ "UgXt0iCpcLnhp00lSokPAdhAGp1fIF+NWF/9w8w9w1BXLNjnvTGftDOQlSr2BN58",
    /*004*/ "rIScK4Ky+knxvozWjGS4NN4mQbtHERLlD+D/slQfs8AyxoyOoz0ZL/yKm0JLmIwF",
    /*005*/ "QpmMTaSdf+DyZcqas/kqvpXCbUaxjz1dx2L5wz4eBcC2K87UzMP9+DeZGcbvwCSQ",
    /*006*/ "7/UB73cTEaP/owJsNpv1MdwWDXZJKbhh3zu9kq9YufaywGns76qXcs2Ehp6tUIr+",
    /*007*/ "oJrqKcjQPT2jx5bsfll3PoQWfx4jONCP4O23HxN7YWR0WEDF5JzJhePFGR/UNYel",
    /*008*/ "mhv5yopiKIBkcMk4BWRKGYAWT4oBXqEEVQk2wgQbvvQgGljvTE2y352HFf2g0Fk8",
    /*009*/ "vPGK5+zi+IjCZHMpIm5rtPOZa5J/8TmTfPC4s4k0KTHxvMlJFs4JOem8Mfo7EEYM",
    /*010*/ "qeLvx4wLGk1x6FWtjIfXr1NBz1jI+5zI1nVPx4aUc8TyyQoTLBn3C5q9gV688oQA",
    /*011*/ "z8pPAXXp+0rkQcz6jK/eQekW7VM7wh48SDIcD7NusHhyXCgEXRYR3eSRlGC12UZl",
    /*012*/ "YNLITeDi0f/O7HSKlIaxBzHFGhJFDhK1hQyBMGPIC70wd0jb3a+T3paRuW7esN54",
    /*013*/ "VbreP6yiunl+VirJ4eO3sZQHW0qraT+l3W1PlZl02vBIIhPhiXwRWG4axZT39V3Z",
    /*014*/ "MxwJZQyKvInCNTEG7upOsInmtkrgZzL18ot+ILd5xbTf0jw0UR7TP/6XgS8+Up4R",
    /*015*/ "LfNgYBzLEC5ja06pMueSvGdC0B+DDSLzf+i8FHRfLFBXJB3pHWXgiRXZgkSwVp51",
    /*016*/ "A+iEaizjrkPj1wssIAdQDCrTBUJHZPS0Bmw43pX8F31FpXpWZL/f6G8EU1idiL1V",
    /*017*/ "J9q46hS+emhEw3INtTp7OY1h3h9tql5QaT+hXYZ5vmEtDum1Kau7Fy+L+nIZkgwB",
    /*018*/ "U/Rv9aQjcovhb4u5XHsbKX2/b3glFkL9yM3o0CAQPeOHnnOLcAxTyi+huATz8YqH",
    /*019*/ "Eddt5SQfzn7fpi8bJGkILv2yWcTcNLiEO32eMabtIuAomTygjJ2DWXTHu5H0kEdk",
    /*020*/ "Dd2w5klv3MsyZzQAjS+6RBzmalghyLyGW+XOhRJJt8dROH/Z/xI57b+8vr6GAa/0",
    /*021*/ "FuXMTuVIisoG9fi3ZBjfvqRqs6RgH2rV2dkN/rVasknh/Eleu303IeeZndX1ZI9w",
    /*022*/ "LOCvaaVz+OmQc5nKBbxm2oVT01ZHF4iMMKf99GzxquoSNTplVXqfs1LoI7wntwrx",
    /*023*/ "r+K7xfhv6ZN86VMCQoV3pEwHfffRJUtwnFVwFD8JssDPqmTj1P1bjfcbWz9nGAVV",
    /*024*/ "yxroWy6DrI3Yg3UrIPuLWOTX0d9wik2jPgOHticGO9DPddzbfr7Q4+qLn7DF6I6B",
    /*025*/ "MX2dSOECO44yteNkK3U2U2UKWFx5zNTkfnbtE/MIq22/Nrr9iH5WjtAz6djxkJQl",
    /*026*/ "Yqos1tA3tOoDsIK5KK2QwOwEV9Jo11XiQ2ol9hpRSKBfi0lNjwef5/5Xs3X7NRfE",
    /*027*/ "nfJPUMOf2nAl/3OGOB+rubpXc9FML5I2SuDnkrI6nPDsE7rZwwvOkOONkTymTHxk",
    /*028*/ "iNbs0Y2jNNhqq0beIAB6qR+nLub2x96cfsRN129aiijxUM5lJy5K1DxPntu1UJu7",
    /*029*/ "5vLdQQ6pbcYJXAwWb+g/Wr7MCFFA8Gpvf/wnti44OPlsAH9hNNY9FpeEkNz+sYRR",
    /*030*/ "HLL8B+0ZV8nr524/BN8SUc40IwFg/flQeWXZBFGon1inBRnXRJ4St41SMwdudhQz",
    /*031*/ "uHxFxRSAbNy2aWoozf011r8BfeIsI2/WD+yC9sBKr1b1KEO2VR3fV8rKhyrF1B5l",
    /*032*/ "AsXueczR2Sb+67E0CjS/aXRxOY6sqqX6b89rQr35qNBSJG1NRh8TW9rW0GBW0S0S",
    /*033*/ "L6JRX+yaOG77J8FUHI/2fjBcSOBGTW2YMYrP5zl7pPCPp/K3/Y05HS4NsfvRUcYv",
    /*034*/ "sNxJG41OTqRD88JJIIKkB7oFZY1KwArEbLEpBz8dudkVkA+1UZnzqnaQP63T9W6W",
    /*035*/ "CdC2DqzLeOqr3iNacqb+oNmUy0R0nHLODaonZmKUqUDVGNDjzTj3N8WzzQEcSSlM",
    /*036*/ "eshFp66Sl3zUj73FIFb/0blWSwDjhMqe1rEowiM5/Vo7KP2znvfb5Z9LCFTjEhdE",
    /*037*/ "vEni2IsoXePlZqNTFGx3kezvlU5o4dH1Bvbd1xfhCJGMfM6inQ+zgQ2MgYbX25dk",
    /*038*/ "4EsERf+R+MLr4ocrbaehdb/C84p5Zc6F3An9TitTPyGIbDql9R2qDbIm2FBqYCgw",
    /*039*/ "OvN5Y2FimmBtUeRTvKM5o+zbWmphkq3XqiTphm1yQ9BlmML0ZLVVhbDWwTGrEqpW",
    /*040*/ "/3vBwYXt2c7C/7qsJSNS65RT0bL02NME6m51BExQcdLxJ/gaqaTbLeQCgI/C1Wcf",
    /*041*/ "j8AtQ60InIvHu5aX4kN1Wt5nGTxb26Y05E6AosI7bgF1LxflzMqbW7q9rYCLWUl1",
    /*042*/ "VdHNxRexP2/F7tacpbDDFmmHU94RpKHZfMNKn5dUjJPbhFLVwbw3N7drFfmKn61s",
    /*043*/ "3+t1nE8ov+voPXUGtOuDszxAfO56EoaqJ+A9UhDdvxATikrrxPaLE2eweNt99u+x",
    /*044*/ "Xtqjeo0T0fZxY7aPjQmouvKqbIsbbefa3B6NNjQQD0B30uhyUX+TfO/mrTz4uwV9",
    /*045*/ "gbA0z6YunA6gC/ZYDbM2kMqL8EhYLDrbZNVQQrnReshmYfnuCS6JfPOFEFfPhdsm",
    /*046*/ "KsEYh/XjHiXkKooXgY1D+aioOZCImpLw/cy9XiJla/DGc7/37RRNLs/6HbyVmDap",
    /*047*/ "y3lpHbQC48oj5h61WFr6uy+1GsiduRNRVqAX7Ft5k2BeNV4uTftxj/KiNLrtki92",
    /*048*/ "/9mkZVIBMNHIJh/XU6K+CeYhZcTt6raBqbiCVhZo4vojtkp3xD6cqLKdIVXgRS4N",
    /*049*/ "q5Kmw4QCViu4p3mz0IoAN/wL+TAszRGv7WInDyV66H/DQnJkEdf7w70is/Zkgu10",
    /*050*/ "Qzmtp8hcGSjET0xGCOjLUyaHX3Z6PY7VT6qFAfZSMNjntDsihQ3L7yisf3heMDFa",
    /*051*/ "Q5XxMOIOXXLgNN+9xtKRkAFGdcLGSb7ja1atpAswvmHBfPpRdZ3XAljaHF8PkUNl",
    /*052*/ "P7SBRMStmUCB69kvkmET/qzOH0SewImpGZDL0xM6m0Q0ESBvOb6pRf4zZgRa0Brc",
    /*053*/ "aT4vUm06VhqeWkefB55YvjgATI5jqaJ1YgN6VwJiO9r2enINHj8dITOS2ZpS/B9e",
    /*054*/ "G9DWxoYetkcYw62tg299Q4xz7Y0CYaPVSxYlBGNMDaDSnUyvpa9pGoK1UflnHJ75",
    /*055*/ "eeq9tkB3aqajgK+WFP/3/oyJzeo+1K8FNHGtMe14DLBzZoTXGhrTDr6ZFBZEaLl0",
    /*056*/ "LtH2y2yN+kZWOTB/FPzCMX8GX94BRH9w6ZQ148f+5ToUF1Njip/jKLLKnx7qKbO3",
    /*057*/ "BHhcglX32O/RDNMLh5NaHxaH/3FGib/vWNor8n9h7SgutlyuzIkSQfnyARj0Qt2V",
    /*058*/ "4Vn8RYZbUqgMf18KwC3mdawWBCGFZ8UJJnYNs+l271Bl1vUZ3Cw7K//02BHNlxKk",
    /*059*/ "OVDunmSayeplADwUL8mTpQYSBwNScxSz7KRkx6BhJ+qzJaxs1H+qAr8DbamCwYzG",
    /*060*/ "qDzITgI/h7LrU4j9uApHl70Fs1nBFf4Y/erqh/YIq7BDLmBz3j8KUfD88MxNuOED",
    /*061*/ "2MAzgNy7W9hP86mcw9kjkv3DY1ttyzt9tQ8M2nT5MBxDUfu+nrwki/yEe1uSVInF",
    /*062*/ "p9dECC58vWoNU99sReryzLghOSv1jJPofGWB8qI8Arqu7dF1pl1j7Gy+4S7yUqq0",
    /*063*/ "BFnLd8Y6HJhJe4eETLWSahVYxUC7plt07XGjIg1Vr7d0U1/Gh73o1fU49fA3Sodn",
    /*064*/ "IcDsnSq6O8JQNA4Lkw5hTn5XdxSpGmgadsPtFJcgozi2SuvuY1XRD3gh1AGKZld9",
    /*065*/ "tZigReGM+GpGi4vYjIXrGujW4rivM7fo+uunEIyqPzHqfFV3Xjd9ElUhLwv3or2W",
    /*066*/ "Nravj5cDiexjlwdcQjwhx3zRtmoDhAN2SR9fOCY6xuD1bRqB1neYKY24BFP8kG+H",
    /*067*/ "Frrg1sK7+qa85oAAZMlwm3uymFUm1bIpfjnkJsdXlkrVeGZ2xswBqJiZYXLM9w6A",
    /*068*/ "v5BUz6gxWSOfh48OjvmY56cM8zic4u7GJAA+1fJ5mpJFelhJJ+HyiGUZiTiPsoUL",
    /*069*/ "J9ik5AMDXhZqQ+jRQk+ZZxsNE27Pi8zm/N6dcBEXEFAoU9AMxN47N/YJUaqkdLJA",
    /*070*/ "yPj9CKCL+Kla4G5H45fI7HR61WmrkOK8XRHjERjbRPqIDEhk/a5nYuvsOi1K0Jcm",
    /*071*/ "EzPNq/IqeMBzYvnykBK6ArnCrVYaL8hjxFH+PsDo+BD9r8wlhjTr467nuJyWB9aT",
    /*072*/ "vI/lQ5QXbszuuKdVxpMc0qSLKx+jNJgr7uwlYFFpO8iUrnpCe+t2kW6ntzCeW7aM",
    /*073*/ "idnt1go6o8H3tRNY2cWzGIuaNTsmvSSwUJupFiJ8wcgpdyNYHaH5cZBCKBh2fKY6",
    /*074*/ "exwgCV5Gt5mB+qQcoJ/4miPRGnY+xi78FH2xhZWjqeKBTvkp5U05CKT6lJfmSJRH",
    /*075*/ "u8q9TBw9yiPkNxrONlQm48lMip72EL8bTVyPBAhnpgX+/luc3dxZ4v1uk/36ZZ5D",
    /*076*/ "nHGPl7ZzTaKOu7DMQ/NTP2p84J52cjy+3Vj1nFOey/pqmN4wTh25ZzqRmBbRE7kd",
    /*077*/ "xsPDDRROvZjoYzK/khUrFA5bCe1ZrL7Naokl9vBjB5A5TjIwD1UT4pUxgHpBpBOK",
    /*078*/ "c2BijO2YzSo4Ms/EtKaqHF3rd7YetNwEaFsQqERYi/hNGgYalZ4dmNuOh0yJcZS8",
    /*079*/ "vS1sXa3+WUlJMFCM4lm9ajSLr0xJxdIGPCmkBBNU5HAD9fLKFjQPUoXbEybZCT2y",
    /*080*/ "kRctwxWotSbGM7BbVeeZLE9RAgBqnc4Jl3mNKysohdTGFEpKL3lbnOe0C9wCnR2F",
    /*081*/ "7GCwz8q2/mLqYcbVaX2XnVYV2AbY7wi/GFfqYKTu8SVllloftUZTonSijDXcmi/Z",
    /*082*/ "pv/oY/w95iej/ZnO4sy5zQ2DdEl1W52XvpNmfUDImDK3QpujrV+dYuGEzXES01Qm",
    /*083*/ "PFhu9tqkH6tmR9I2ore27rPG9f3NOAepTC2OZOWpyyijDf4MbL/l/YWE19djuACd",
    /*084*/ "qhbqTgm/+3XyKdd8Ah+TSH8umwB5BjZdGuI9vUjR/N3h0JSwRPW/TSIsNZRiXA6c",
    /*085*/ "0lOIlv8nOijyAw3qbAyWsDjbc6QHuisXu/TmltKHjGgPz2hdvOm3XLS/Rw4b16VX",
    /*086*/ "L//kwaoIAd6ZK8bqq89G0wj2tZg/IC63vilLpYw9hYGAFqqfyNeupu3XOVwVOwnS",
    /*087*/ "hEuX1JmsrgvatMmZpljyx8H1zEpeLGJvqr6Bl305q1jj/wHhZx+Bv/MOPByIwryv",
    /*088*/ "PmyNUfsRsiZKeBAa1dq6ZGwYh6UGTr7mXM1DE8b1cdRd7arWDbuJg32hFIlnEoHI",
    /*089*/ "fdKIu8MLLSvSelH/+tGnxa2Cn6BWkPOWTk3tbBqmOPtksvmmTo4wnbPG7EopzpeQ",
    /*090*/ "orGQBpUryo/fItQDv/w+KatTY+ezJZGMcwGnoZIgQD129purTJerm25YjF3F/Khe",
    /*091*/ "jOzhwuiSjEBQQxu3FMn0SmkQ+83groZRZ3xlufrqhSOAypjI0+QI936QhJj4ucge",
    /*092*/ "eBgsaouV6EZHpngPQf1yIQSQKTrYnY6dJdBaJsMTCTnxy3cw4vEx0vPXgE5XPu7n",
    /*093*/ "skBe2KNnhVpzzz8TYfHsFtcNPLpvXNpS+0uz3oN55VZT0Wi33E8lgy24xjVf+RSa",
    /*094*/ "5kqd4cYpikkRuidg9Kr0LgWV84Sqfbq9TZTc9gQqC5RTDfwQVtN+TuFZfpDClN26",
    /*095*/ "gF9HP8QP3xQv+EsmjariF02Ti+XfW2KSgeqspBX0hIMrZNjFrl6cjodmghxf9Y5N",
    /*096*/ "2Shx98Q1I0qUuprSdhROVERQeCFjyE5lWkSAL7DZSrAg0MiAZBvgsL/Lo4heMm5Z",
    /*097*/ "YtBIdBVVaYlobSMPTIywDaLE0Txb/Kg7W1NE4VN89QRAaOR7zE3Qt0ZGM5Ixmb5L",
    /*098*/ "J84Cq+Y3eB2kPknUrlujPr76lN+1/crRTwwXYruAtZhDHEKpbHrFwzQWIMHCX9Zo",
    /*099*/ "NnVxSLy66voVcy/26FFCRSPFzf2n6BizRBPJEyCDLnxSkGnRr12eTac3BYeMLiYS",
    /*100*/ "ogKE7wtdPooJmQH6+sU7o/ViB9Cs6MtjeEGYgfGjJuq79kq70Xjrbl+EDjBxls9+",
    /*101*/ "/ND1zHy2EQhrvZY0P6uMny1cNfEkfctXgN5bFpSFIVj4eDplijbz+mJ3JnYB2EzA",
    /*102*/ "sCOqWud8QeZhF6bL47+nNO22yfiW4xOMY+0JS0ZmkFyD4lwsZGrLdsZJtD4qCI5J",
    /*103*/ "oFp7NabeKm9pe1UVKzjaVK56I0YZ2Csw3P4eEYK7DI/T8iDOrS3dRdjRoujppXeK",
    /*104*/ "KCqGNScz7OFEfJx+Gou2kuNj6ZncGFb0cxrdAkWYrHwNhHDNmAVlyP1ObaKEpV2a",
    /*105*/ "XMFABwGbsRaaQxYQwEpUtKWZL56cdB8iD1dlmieKPqatctCtaRYjxwHIC3S6NbzF",
    /*106*/ "lIY3T1rnRGxHdleKEM560tYVfvr6h8QX357iyNVUNmr6H2HM7V7jDJNQCcADjIrY",
    /*107*/ "LB9LvEhpEM8Sl7mQmdzAkTKrCeHjITsZZhbdCAbeQDMoKGC/d7ZbinG3lxELQSxA",
    /*108*/ "PlSlnPQPCOsnytZClUK5tAUyU8Fd1JlZPu8bijme6vfG3nZUdxeIvgBByJB3TQYX",
    /*109*/ "1vinUJGOMvP4/awEG+bjUhWwzvMQINhR2NV2ZjNz1llCw5Ed77yzTEm+M4C1mlgM",
    /*110*/ "VTjg3A7nuFRX/YeW6ZC1e90fK41oCP9sT5n+iwZtD/1ErokkMM6b6+TjYQYgH7Jm",
    /*111*/ "rWmWGGAAXi/kygA80PE6R7Tz0WiSKXgC0sl+OrwUh4jZ0utx8Mf5nxDb/13CXVqH",
    /*112*/ "2JmDRj56qeKhDcgyyur3Ox0jwraOrNwTl+4CEQ7JfiI0FDjwMkg0suuQsQODiBOG",
    /*113*/ "/r8m4Gw7PTpZ7WiaO5XUGKB3t0pXe7sksdyDSdZ9y+CXrGmYQ4x2zzNgDpB6vGKA",
    /*114*/ "xzN6irfD1DnrtLAq8i7XQ5QDpd2Ega5UNoXDg6B9Kgwi2Eodkm+8nUKqLhj+Ybss",
    /*115*/ "TdILbICazth8ckVYpmWd9kiw8nbMgf/DWM5nysP9sXaK58v7CpfQzvP1JrdBKVBX",
    /*116*/ "+fzOf8GuBuCRNQCeYqHKBRJTWJ/JDAW3kJQVHkBgkmZazFenWtJChAx3OEDNVYYi",
    /*117*/ "ofPx02eN7pP01/jbSG2kvjxFRoYr8JE8WIoYBB98PWyE75z4h3Kp70v/ixBONkDL",
    /*118*/ "JfhPDXPj3MaQJ5d9+FSvAo94T28P0ml9j24WTMZVwpCiyflLv59So2tPaTYRxM4+",
    /*119*/ "P3vKxl4K4T2qrIXQgWAZfvdgXXDjDV/fdXDF3IN8PjmXj7ncwjvzpcAEEg0Ff+sK",
    /*120*/ "BbyoET07O2/cuJUrq2kitRNfOLFO4u0S4bU2WGu6KyBJzFqSxTY27r8Jte72TCJC",
    /*121*/ "kpq+xLvDDF8u3VTM/BNDWDZAOQAP6R/BI5f8cnxmcTOfjaxiC5kRlq1/MTzrufxM",
    /*122*/ "uj9KiQpSjspAzJgAuNGevXx1898HRfK97DWN5nLFrkfkc7MnPVLU86sFOpcWHrEa",
    /*123*/ "fYFrwqaTwv8o2FlJE52eLL+bGQhkIaV/YdjMDd4C8KZd8yx/xZ2Pvkd2pIbf4lIT",
    /*124*/ "dI5wAeFbtYQ+nyAhN8XeOr2t32gemo+xLc90l4FQoAlihwo4XSmr5J8jnGgMW2Cj",
    /*125*/ "j/7fvx8Dx90KL4Nb5l0XC4WWcWW8KhYxsTa8S1NeIVFErgFdO30vnxu2g25CokPP",
    /*126*/ "SvAWK2fbMn6It2oO3kVvzkEL57hIhXElxPqgOc+LNtdHDIhJ7GNolXQWNJZXMw5y",
    /*127*/ "xtbZM456cAbGdtVs4r+EtmzEX81efvREt0TYVqgjG69+ZcVqkSemmBl+EqFkOQwE",
    /*128*/ "m6PANDHs2qUf21q9YEGgDMsanvKpxQ61r7/3ahKhL76zpMXJxAr8vinrsR/HOUeZ",
    /*129*/ "Y6eDPjQt7G8M9VdXcaXbW7MRauQuKPbWJFUqkvUBtajKBbYGEKKCp4Fcl5bo0guh",
    /*130*/ "7dAmIlPgqri3hA5HwDEYiSj/6EjWJMh06wY5rS7g5LUTp2Daagi7WvEpnmpmVwyo",
    /*131*/ "CiPnsVI+nlImjvDJYYgUDD2ArRsTivwMn6ovkCTzCYxImJmHSe4xAldUKy5JiAY7",
    /*132*/ "zRRoA8Xqpu/1XaqNHzx3AjHeAge97U4O70DX0FfXf7qLXwB0DF+AqPgePv97RkgU",
    /*133*/ "DcdqAWa3ByrpGUI2NVwhZPH2/DX+fm/NZ5LChGDAXPBEpHkl8/I7q8m5JZot9HWs",
    /*134*/ "ZITb7bUUOu/p0C0tgOAUIyp2KPmprt4UAlrhgLTrY1fm9c3oFMr3JbzmYdwQRVmO",
    /*135*/ "CwAh/dw4LOanPe4X6Sqze1a2yUziFZ/k2GGj3FmC4lZIXyipCIA7tBvmSn6vtMYN",
    /*136*/ "rtxCESRkPHA6BkUsNDMtc8tnRWKhfoc3FNFNYTTVcSjR9ZQdKglI57ccbQxvBSRF",
    /*137*/ "+V1ZOoKxJeN8OW/J1Q0tdFH0qUCVHDZEuR8z9psvOAJnBBrpu6/LjqgE+RE4v45S",
    /*138*/ "DfsxRlPGK/1smuv+NvClJ3UHHZHXdvjQcgtunKKz7xKhHYdePcpL3G/0CObmto8C",
    /*139*/ "SnsKk8jsF+89J/tyRrOXnY9dojVfg67GWx/CMJVGJ2yV51Bhoha8LxrHteCqk60C",
    /*140*/ "Vt0Hz0O+JG0vKo2jYh1oY6BKchG0yXKYCmkZfIW0grj0xgQojbqxh0kL9DbMmbHX",
    /*141*/ "D579c4WN++4KVpGbGQM0k4wk1WUWtA3/lkGY6gXhLjKb2JA4+OCM24AfkDyY+DI6",
    /*142*/ "rFshP/naLAisTye5oRjBZ4oZk/scUHSv0xLooKtcUlNuiv5eADqvyf6ypw223ELy",
    /*143*/ "3xRzu79/iNNCwyD38Mzc3RXEyDMcM8SyW3j0ZwcBZhaH5F39wbdVhPJ1GBjqxSGo",
    /*144*/ "8GKFQTGYKH7DhbFCMC7RKpaupjXX0CB8Qb0s4pjvi6ZDMtn4Ih1BoTgvPU9A+xPY",
    /*145*/ "lEJmb6fAP+HL3f332ckhfvix1mazaB4WdDh0tX6Vv1Vm12SD7xMystRDZvmKuZtS",
    /*146*/ "M1zbqt16bQMuAy2AX4MlBfK+otfY0Pd9t5Z2skR2koS5tfnR5CFeIf23DsRpNnR3",
    /*147*/ "hHeJ6EtTs6mQUBpUg0L9W3iXHBLN/K+Xx4l5Y8nERsHHWdrLL+cgCE9PrqD04iZV",
    /*148*/ "wr1y/SCec6SmTKXBpeVubVxOiMtveqlwSJyXnjMIYSunI7vWMDemk+VeBACrzh1b",
    /*149*/ "24uM+OQUfELCmwOOhjCGHRstUFGiQNszPStdtMzJQ+AtewfutmcrKSp0TOK9Lzoc",
    /*150*/ "atgWcPNp7T3D12asE3uUmpyzTN9Fhi2C2hCe8ZgPoivExCpCjRMDZx1KoI8T1jSN",
    /*151*/ "LBF9JYuc5SjPn0nFjAZHhxoZ+YC3bsHWCK/3MxYVFrTDoaFrDeAwotKDW5a5bwb9",
    /*152*/ "N/yPfxu89HDcD2vlMQPcOL0LK62QcqupxoMHPTyXB7MfEcrN9lXEvdzwuBeD4PAj",
    /*153*/ "D8WFkk7C7grOGrYzeKTNOyMH7ln5hpmDuV5/jUoDWcm1T1ywBX6t1MQOep/Tozds",
    /*154*/ "By2/DyO3JwJH7StjrdLXKNDvElCLj70HQjRA4DrUoEihSRR/IDmJmxny/bkBrR41",
    /*155*/ "Je8cMS6dEad5BO3E0CxTHgsK09h4+HIiQkyc7SxBnHb13ctl+vsvJo426iFn2HPb",
    /*156*/ "sty6Pwvp20tX6m+NOuwkEwANhTDl+55t9Mik+K+IGkAcJy6Ka7dcZUNv4b1tW1A1",
    /*157*/ "N3D1I37lFW4m+sFic3NiSQu4KRgtN2LJEWJN6jJo/qFjd275B+MmZ1tQdxYIYccE",
    /*158*/ "ZMFvijr/4kJosiidvLKF+yg6UyTwz1nFzrPaETk/yC4nanOdSscPrs9Mq4sE3Zzb",
    /*159*/ "ZecgHSJSnNcE5zyQc92eSUmD9H2YbQGbwcUv0Uq0+vz5/QC485MSgb7OU8oZxh1R",
    /*160*/ "3+0muHjuWaBayBdNKa9zRrWC8k1OfVJe41z5kyaaW9uW8lT7BNNRZcwvkWUNtz6r",
    /*161*/ "NYHHtmdPDH03TTDep64MOf6U1Mirn+FJFkWgN2Qbnhpa82qrvcRsiP4C9URzISkF",
    /*162*/ "7iy1QUHz7Tw/V1NHkrozgVoCZrwivjLLszxA3oMBSAwxz98ntIRbv1YhI7CNQlFy",
    /*163*/ "yyWOxTHo/IZ1/MtF/j/EXL6Z8ULAfIczHC7CDH/6EhIjmB99S6uORJ5Zp586NrGn",
    /*164*/ "bRDloO0vjC0/67s4aDYuGa+gzgqmaiI2apLzwV0o4efs2YMY+nEDkGbrYPMaO8O6",
    /*165*/ "4+C9EhahotS4TMsUpg2rgsb0AaxQTZoYR6b22aFdauO2EWux1iAx5HhT5zZCXzl9",
    /*166*/ "f4fzR81VwcBxyjTD5b8DS/dPhEsfD3F3xY0Ocqu7QzQGNIbFaIg/8FDrcsgRBdYP",
    /*167*/ "BmMotao9JYyslmFK9Tikml4soiPHCB0YoRA5jshJPGOwdSaZZ0r1yXbZOL2smN0f",
    /*168*/ "96l1ddqTCKEYoLJaAkpfj8D/azPwOAXYb2KJONNRlw8akb8luT44MGDMGc5onxTm",
    /*169*/ "mAW+xrodCLmSFMdpvNldeCsXbqUMWgOLiEhyADV4RolpBWVYyVcer2Ei8k+UTt7h",
    /*170*/ "0sAYJ03cXurkilqhTV0cyxUwFviCIyfGzlR7BeU0qZQN0Wg9GkiOZaBGCuUpSfLo",
    /*171*/ "zYL0GihG8X0Ge0Am52hLAbzdcIyTZOVsotqlct7S2jaAKQuc9jtXbSkDqrQUq01o",
    /*172*/ "X4tzTgbcaZz1NhxavRbMgxIbFG5eNpup6Mz60Fr6SCdJnNlHoHPQJgwMW1CCsQWw",
    /*173*/ "HP3QDqKithUlWtabcq8zkxssvZMyM8wi4YtesUnZJNcXcbkSBdvQaTxl1w2YqKyF",
    /*174*/ "8rN71ynGDiOyfCkdmVsRQ2/HUyx5Vfmip1vi6yhnp0gARDgFpGLmfGad9Gt+a8Dd",
    /*175*/ "C0FEdr253SAGjC76sZFjBQB8Fs9R3k7KcPg2BVUrYEb0H8KXJWdAUEuE+4pu7PgK",
    /*176*/ "g7hRknTFIwAAfmvWhk9aM4/O+j7tPTWu3jV71iYFyD9TvIDa+3iQDRRM/vPfAHlG",
    /*177*/ "E4FEar6ynA8pWJpqG1SN4w78VPPaUzln6WmFfyeKgTw7KhLbd+oWjYTqthgDhgrk",
    /*178*/ "UF59LfQRzniNmZwZ/233hMs16TqOV5uZEjLmGywJ/dnYFtOsYzzzMQxc1rgwgKBa",
    /*179*/ "6U+onOHbmAA3IRTRF2ZC4hvieGoWxMNj5LADPjVFsXTECOXqJAg89CpgKCVi5sFY",
    /*180*/ "b2pC0ebrJ55Co19rCmBqKnADqWsw4veP3d0+aBrZg9+IUyLwQiRXKQoyN2QbD8zp",
    /*181*/ "TgaW6IDzTQWkiK2jShq4+m8VymxIJnT4YClHN4I8G7sKlj/3fLjAfgh4D0fm11dc",
    /*182*/ "GkphrAPhWFffWBP4hu5qdmo5dNxRuj8gH3LFafk9yXiXZRkw4jKe5lu5is3Oxofi",
    /*183*/ "l8wNDMGnBipfdKZoginVmbNYSHe7GNjyhthkTw2CKtWBOSZ6+I6AL3bGR2NuIJG7",
    /*184*/ "RsfgHNfGRwgRHnxEG0X9hsxvheKwIwbCHhiYAy363TpGazNroKA2Z30lsbLuCsfR",
    /*185*/ "dpcaFA0mM1bbo2xZX4Aw1UbON5T2PuOMiHB0fulULfbqRZtIGJNc38pQqAuf0qqk",
    /*186*/ "n21/dhZ7vb3dtrfxJ4SW9+52UrOZZcdYkdetbH9Mbyh7EUIXQMCIgWPRZkKW8cTO",
    /*187*/ "JFsTtabo5Jd3eSnlhdeLirvFW5egwUVFfeNZn73j+hMr3pEOfGLVr6nhdIR3rCOi",
    /*188*/ "O2ts+OrxG97+NQDVrKNGos0hatmdF4BvAw0wF8u3jT9sUJRdi3l6SUHoGvbG3FKt",
    /*189*/ "C0QfjtDhpPTgImTVPGMnXiAUtB1PwWUUwjeNmEOQk5pos10k+lzmy1Wo3SjerkBj",
    /*190*/ "VCSJP1q2eh+htb5+FrQK140CwiToMSabvBkV49572dWMBeRJdMct6v+6L20tTyDr",
    /*191*/ "XWaicZHmN2UjP1pDNfjSP4psLWI+3dWt+EPi5dXNIsWiqP3b8yfsWkUUDlftZXpH",
    /*192*/ "Y50u0wHLpztrQbXnNFcznvY5RfmEatkODaf1beTizkUc7K/p4S4U3t1y3E8cEtZ4",
    /*193*/ "dws5U/YKs3u2e49/K085LYk0rxPCo3cChNBW3XTm9n1RJMRzMM1DVhjcodGLX7H6",
    /*194*/ "iw0V9atTtEKM4YgRnBA/kfk7tB9jt3vCGYQQ74Xm3evqM23Fh3zWdoTwQK/Ac+yV",
    /*195*/ "+wv1oVk95LwARtgEyidwuktkvqKY22/7Su09mX533tU6D3HfHp+j/EGIjYU8ieWl",
    /*196*/ "/Kyu5nbHisbrBmGGx2eAU+P9Ti81SnvSeOMBv7OifYRYbZI2weN5PBAWqiaHvFf5",
    /*197*/ "EsbHA0IsSZX8IYPusQ3WDUIr9gKp69nh8qQ3Dn2/LepI2vWLCbkf4TijjoE/If7b",
    /*198*/ "3VZHbTEhyxdqFECBSVKJuIhChID1EoFkNY/V98OtR0l3U2riKM4cZZv4N/PaAzgL",
    /*199*/ "47bm3OIWq77fcpHjyOw5jw6c8j9VyXxgpwtPTxUV/UvkjEC9tjBi7plOFg0RVLY1",
    /*200*/ "1BzB0hv/3a2gGm66LCYaKkZaRwkdKfILMt70raugk0xjPjMnE47ucyg70fUxIK7z",
    /*201*/ "XKXZsqt8bCT24B4sKMfpUNfToGWVoL0v66QEnGdSZRmC3aYp2mZ8E79W2ktra6cI",
    /*202*/ "EIbi45vFo3xI4nofz3XdajVkenNQdHQBO5K0spwl8qEQcs6OXvXI4Ju2UPOYQ5bX",
    /*203*/ "AVGC0U6GReDFoeGTkZZUrMeUB02TWtgjE0JKc8uI+rT51aO91r9cfCWIdDjpf2Bm",
    /*204*/ "gdSAodJv87r3mJUbrEDE6mywt/+ATaKaY/FYc1EfYHk7totBMRgH0QM6fa6mCZaB",
    /*205*/ "UeW6zdhSkT4W0D0gP3mthpGo1Ip36zq+GGZr100lECgnwzZm481dm4zFi4ZlrYoK",
    /*206*/ "KhWTDXhyBm2RgIJ7JAXn7j9GN/F2ub2ev8HQonM+3qfHagSgC6Bx+IY08gOolkxI",
    /*207*/ "+78Gu9q8xw+zCWM9+z9c92KREAPRBaPsYf9PIDtQPzeiP5ZUnywzzrTNQiKlIESa",
    /*208*/ "wZjReRFIHcdpJenORShaULVVZ932vznzRZLojSvV6osryg2SZW5oSzeK5j6kP1mZ",
    /*209*/ "ARXmF9doCtmmYZGhriC5m+SxDtmWbz0vfT1RELrsFd8xGPC0OdXl5jbO/ih1etHH",
    /*210*/ "r/vrtL7wT6DKo9o9Wwrp5UWh9AkiVFOEB6e1K9f/poBqvxpacMTgFH1nisEf7JnW",
    /*211*/ "dRUY4yShIXBflK0XKK563FpWDX8eUrWL7gUIL3nTcWYaOkGUo46I08z5W7VHfk3O",
    /*212*/ "aN6qPCZA9CJ7rC53h7J75+lAKpZ1N0kpG7mMpn+iBh7Hub0qkwLv3TNSF9yIO/B5",
    /*213*/ "kSM+tRfV9mU5HAvwomXbl1VIqoWbrncdcQebPps7ExnUs30a8dl2Y4Rh4Vov0JqU",
    /*214*/ "O5Kd4M00RP5ScDtx/fywAzhyptSQMnEtlu4p9m+UVisoxLOyAV2hYKAzOXmvXh0L",
    /*215*/ "S0kNDvv8QLze0bPHSEYco43sB5ohPBHxHL3CpbG+eCOUoXCAR8MMGSlj9czhttpj",
    /*216*/ "kb+6gp5rG5ABENZFTCMqh2xtzMGVaqRslSLw4BWTdyKs5ms0lpOlYEaISMsDpWf7",
    /*217*/ "C2aXTPdA1FAM/u1kv8oe5yLOGFeJGyCABtM1TYCJXaCG0LCiAgRwj8DfpEwzy28y",
    /*218*/ "1c0FoC7Q+7wVMVV1Rloi8GKvp5I2i+EICu2MDIJK0wXqgD7DzteoUZyHrj9QB8AK",
    /*219*/ "GlI8yLXvPvSsQYjEX7Dp5fm1hb84LMV5qfc7rhgIzSZ0X4/KMlw4T1JHlXsQInvx",
    /*220*/ "sKSYkZb8SBocTgy7QImn2ZF2DuabHXhCMIoPaPPK0Ycpr2pgk/Gf0JOHBGC82hhF",
    /*221*/ "NKBWShNIXfC5adyR616miWI85mA59MePkl5B+Z9rHPo1eTRWTp0hfoXvCt7WSGor",
    /*222*/ "/V8ES8X5fxqyaJQuVqmgRJK/Hi2iJRTxDo7SCxIzjSBi4YCvl0HX8pNs5t9zyu3O",
    /*223*/ "pMkpnUOQcdWdr14r3AfARNzOgKdI323vsSRgqeQFsmFd/sOEzraFGCHO4raGabW4",
    /*224*/ "mX4jNPqsbfPQ/rxTUutFvsAasrhGaSxAZ83p5/ymYCT8KSYWW22a+B6C23Sjzmz2",
    /*225*/ "HRrD3HRg4BbDOPrDegFy8WDthLdLzsG7ceYq6Lyoidq7wCaN+8/aptb2CZaugVEY",
    /*226*/ "YXbRlN3bEPGT82m6TLuf9QBePD/7YDtGrHiO/pa4YBy2Wt6VZ+KzXhliTWXUKHOZ",
    /*227*/ "YUviqxiRBiFq/M6PxLgcgQL5VvssAztIV8CMGUjoMvtwT6BiVIEgpuJZSYnROACQ",
    /*228*/ "0Oz/m3gJ1VqgnPYlg17N3YKMm80aj00VrzzOlF73fay+VIez0VRlbeeGhHOvZNu1",
    /*229*/ "v0OarKEIozWS5OazWoBHJo9YYW9hSrdLTvXbW+4CRvrbdHEKR2LdP6z6CKg8Q5VX",
    /*230*/ "BaZMd7iUoFEl8u50TJcHX1Opga33/ioC1m8zukvEZwk9uuyKkSejigo/PFc2hAv3",
    /*231*/ "w2YHQoNPN8988D6hARnzcQ/c+d7HVq1jMaL1Wei1W55MPom5O0W/0GCXccJmS+Gh",
    /*232*/ "SD79c8xhGLThS7A4oXkdRheo+zd90xBApCUyaaoiln2aeSaBS0UEIrZuzdyH1KUz",
    /*233*/ "IDMFejHQkdJ2Hw3l8Xh24sefFWM6Zj2aUrS6Zz9Ne60czjMrXsCcJsO8NNccJrgP",
    /*234*/ "7iVKPW1U0PPyt8korXQotCgtlimLeOxzU4UrE0g650pmC5Gg15lsdVxVLXHC4qfs",
    /*235*/ "3R+RJL+ln1VLVXA33vXdoUa5ZpMT/cPHpCsdiAzMfm6HS+Unam3nFHi4+sT71VJz",
    /*236*/ "CqyN7StimvEuWvx+XY5UNbJX8LR0ScjKrjUDPdB+Mas4F8XyOMEPcRY0QFpJzJCc",
    /*237*/ "YQTxNrnep5+dL0ZYC5tSoWXsucgRkRCf6jNORCjroyM3iRF1yoRAVcLqRsmnWJ1Z",
    /*238*/ "TqxWeLuqw26vzMvBB2kOmPXLAMetV4Uf9NlIr+Acy32Kq5mB39qzfxLz2/q4bbPm",
    /*239*/ "YBYQej8ND8CXxrYtsZRbYDhftqJ7T5R5vOJH3d6KhUArsJ8O20sEHjmVEKMBnceG",
    /*240*/ "KkiYWz2JMZcmA3n5Z+KN+11QOhQH9ICH46jTzPyuHKT+p7fXs/BCoKyhGbv+UTE+",
    /*241*/ "UGk6AHn27ecSq8ao1Jf8uppVeZy0lsATGVBLQwElBcMJ+63nI/uAEsAvvTFdkFkZ",
    /*242*/ "W8b8/EYMXFcZtDQ/h15i/qO4UX/M/ZYWwOdaDvNWnMcVrX/SHEbjFFkoR8u5zHsb",
    /*243*/ "Fo/M5Vj+Bji/wTRn104k+FbbXQ8OlAROe4sVxN2v0FvJxRGZlLrGpCaXrlXBKm7/",
    /*244*/ "REERuETIx0kAyzXKG+RQtHz5vmfsUCQwiw0e20kgZqj6uI5SIsBp2veiwYVl8btq",
    /*245*/ "TgR/9g1CuzezB+/i8+nA3EF4dxiGCBBNrtoFkzflkgSPEuQ3HHmkPRfqpMtFhGiA",
    /*246*/ "nY3P5HyKOVGlnKaR2PylSaUtOcIOpnI9OVWrebiWgg7eC9wurwDLa5A+S+VIOLm+",
    /*247*/ "GS6SGCrF13r1uPXEVywpKQvBd6WYH8/wzWC2OymfKwf7tnVVT2C4Cdv8uYFqOcve",
    /*248*/ "3iDCtK3XSiUNB6CVD+JibNibMDnzieutnyiLF8yF9qKlle5dW5BDk4Z8l6I0D8Pg",
    /*249*/ "qr/P9xrVnGYdJ4Bob4Dg45C/mOBZwjRpSXLK+/Dq/l22GEGLlEv3icMHaPvqCmRT",
    /*250*/ "IOFLwNysO91RjhlkvUlJbXSKWWaWs/0xgVrBwOltvLt5YsBhHCB/8t1cTujjrzgn",
    /*251*/ "3hFkWtMf180/Uoc+eRLAPPM2yg9y+M+wEvAAc+Bf6JMLCT8mhaCU6OyQ+toBCvYt",
    /*252*/ "3fq07rENpZ2aeXSZnOQk5bnLJGry/wnezees8+lxna+d7GYlprFi61M1fSGxKtAG",
    /*253*/ "IjXgGjnmMd0V6TVbBtGskxiS5wPMVuv08ZcMhVyBFwdvClTAimpPv/B/UOldrvj8",
    /*254*/ "B7JQ3BO0RavV2FGVNhe0QBByjhBqKDLKr5PQ2FReIgPpdqUeWaVsS2LgxE13qxJO",
    /*255*/ "bLls31D49NldM2cWG9i6iuVynOfPeUDLlmkxPnYvVOXEl9O5eUs+MBFRlIsDM2nk",
    /*256*/ "AiUNO8VcsXVYQ1Kga8ob2n5rwFZ1l9qeJRMKz35yV2z4w+V4Wj1h3FqUtKOULQbO",
];

/// Per-round addend words, indexed like the XOR table.
const ROWS_ADD: [&str; 257] = [
    /*000*/ "aFqWicJYgH2W7G4/yToOpIjaZGq1KpZCkao0WdKRY/vMza+Hfo+V2fj2yYLRFIOY",
    /*001*/ "Rn1i1iQCRhwCo3do7TiDDGseLYqEhpYJSft7XSFts0MEfNuU+IaHs5CLtuCqOEZv",
    /*002*/ "ziHHKliwc9aLYUO6zRzRBzmcf5g/m4/WUcN9NqWcxhvVVxQjtV8xGVH/xCOA/0m8",
    /*003*/ "5C2jkTpkeWEDM43vHS6HGFLaElQx2L1/q6g/tcq1qPHGOsKK9OMdgEiqYYGc5Hqv",
    /*004*/ "u7CbEYxqmwzhIB5d6FrlDUFry8ldQ7dIQWjvT+TipqNgALho6GkW+cvKWIKQz0sh",
    /*005*/ "sn2U4h05lEW8wp9uzHFlPiE4Isi7egZkR+ACR4PxtL4Fvkah2QbxtENoS2H+6J2b",
    /*006*/ "TjdM3NZbNwln4mDrkRazjERVNvAduBWpUTtIVLB6BJ9+nI5om8cf0IsRWSPep7jM",
    /*007*/ "sN3svEANJ/dwfr1fxDv3xBB+UInv5Q/XyXtq0a1NpuPW+YyzVGEBzlNT2N/Gpgam",
    /*008*/ "pAzgiORuufgBgfWu7lWJBszBYWrPWatLA6rpXi9U4D/8k4E4IoaQ9sV0d/Tupou3",
    /*009*/ "rq0IIbJzj3mQBBO7RynXNwD8rDlMHj2ksWJHQTUdsc6kCgJg9RyN6MiRdBX5IgPi",
    /*010*/ "vuF4sMtfYdoCrDXs4QnzKK7YhB27Wrdkbl7wWiDamjvvyMuP6I5rDUPJaRcBrYqv",
    /*011*/ "3AECGDjAURI3/r9XxwVjmlYZHM1DKZbbdJpWWrnClIqdBBagfOq0+wrwd0SPBAPz",
    /*012*/ "5hFpy4goNxZnb7ys1XnFMAWQ6gvQIBvEQAJN2smQGYhguKuNTyGZBcg1peMKYknk",
    /*013*/ "hB0L+eoTaRHh6LE0YRlOXlntdSUhQ49LT8N+zbaYdpw+8ms5VCrBlAkZ0QLYGf/p",
    /*014*/ "inYEWuiga4yQAlW28LM3jV2cPnN9CMLHmPLp4bgyuafHzOkBxCJROFpCJ/efgeuz",
    /*015*/ "bJ2wGvvbdV+XQR2sPAg3uGBydSsUia/ZSP7jHedxH6yQV4wJRBr3cV45GC0C5JMC",
    /*016*/ "Nj0AiLBh+8gcfwe1BBb+PMm7BmfdIixNQX0wu6lW0DmUOl+hKlOGLXoBzCqoH6+k",
    /*017*/ "XN15K6F+aXQ3CQ0GL1ompnBdqO6I/o7t1QlOKKh8o5+XwEgwjkMdHeLaoWIziBml",
    /*018*/ "iuSqukAIVmgH8we3Jxw40An4ItskTo86ZBovWG1S9axNkOw14+R8wHBJ3MN1+Pvi",
    /*019*/ "72l0soJ5AVKkdvCiyJ96xjHpLOJ8FNf5L7N+R69TwS2QCJqIZWs54cQqqa56XU6H",
    /*020*/ "mb1MzOG+F+Y5acq9qyvtrHG4l2LnUIVjIY8XXvY68KpQtMqB/RJ9W53R4byprHJn",
    /*021*/ "euvvQbOycV4K7m/eBQusHlTAGNte9oZYgLMpx2ZUV4sKemqIIAIzzi/Qhhf/8t8o",
    /*022*/ "721wssckJ4AA6Sp9FFL+Mxy6t6Nequ7IPkKPXSB/1LtGrwg6X87Qsgrzg8wVVlOt",
    /*023*/ "QnWrYtl7s8ljna6Mjxg9F2D9doBJembz5JLh9/B05wi4bKEDePdPr9Yn883ZDOev",
    /*024*/ "qhUeIEORodNQSlW1rrwlEECEr9x/drhZT4j7yVMzRZLQ6QE07UIn8yLFtYIOLjiM",
    /*025*/ "enwLuQhZC88GZziuPMVx2mjLBcrt1pFP88Zc37jmh4bC5+Qbmw+Iow6R5LXhYD+w",
    /*026*/ "xmkQeImzw/QoosL8FT5P9cA1BCh/iHv5wKhQTuzfg6UGwu0XtOV1lq/1fYAmaI9h",
    /*027*/ "WmEiLQ1sRoMH8gae4SBFizTgAiWeZYtNqengS6A9ZZ2oxgS69xJXB5gG1QZqZ+KD",
    /*028*/ "cvO478wzZfwR8JT/ZBDWAGFTMvr3OokJX4tRu1C9woicILLpZctomI6OErcn0ifz",
    /*029*/ "krpeyDMDX30r8jfOyUuksslkjzAaH7fWGY7Jn4o6oKmWjxSbZeuLsVLVnchzEP/n",
    /*030*/ "vHWLccdCxFMYakLiwUq06NcNcmrJug9acsL1UO1x6Vqk88iCxmvbu5ZgXMUotzzh",
    /*031*/ "LfbJnutwvVqDR7QYoT3vsIKWhuyq64LaM9WIQ2gdpIoEHq0QcWM1kowLLAhAiy+7",
    /*032*/ "6OUDeoZ7g5bHcVaAq2kmjK6XcVPaMifzAOsU8WKHkJXXKgi/Dfan/EhZ0oDnwn6j",
    /*033*/ "GtaqBODyIX85e5yQxTZm2N/6cKHuFj5RYOvHdyu8JbfuHwGsiY18sQq/77cwKd/N",
    /*034*/ "wVtvuY4zH8oSriCa5EQtBhC+cXsuu20VkInmS/nwOKDVXGiucIPmI4PpaXCyWjrG",
    /*035*/ "p6GZYzpY9I8FfvYmvSY6p5DV9VKaSJFdSdlHULV3orMIvCE1dIkirhqQwfUwu9t1",
    /*036*/ "E/566UIw4UeXo76UjUCfKtjOVhNJXs9vUFNkTwQj0HXAVI/k3WAtuCc0MUhmZwt+",
    /*037*/ "4AegKrSLhWQhcGIMNWtMgMz5Hln94h9cQ5fuAhhyZkbkTVvQ9EQjERo9QmxxwCqv",
    /*038*/ "1G/OdyHDgVpkejcsphnoAAPwaiBrKuK9gcMFWRQu+Of61q7pposXI2K6AKmEbLmx",
    /*039*/ "mL5205MDI6cm8dYgIH7PRxsQTLwR8qJXcVulE/P3746PgIM9YFJYoZpxaBS+Zg+k",
    /*040*/ "5/mhMmlsrJNzVheOkRkOkX2K3hp9Eq9YUa3GU/APunxexdapambf8qOz7Tb/uj98",
    /*041*/ "GMWCYMYqsUkyc8HO3NUnvWkYAj3CGpXciwdkTPbHNvu9RptXMQNZYggjgM4GGlvk",
    /*042*/ "SRmwqkpgw7J6qGxnAimjtsnqOpjYpqGLyMnFh+yx9T5MUhtZkZsrYwpY7eHVr673",
    /*043*/ "+/GygIMqONASzxQttR+gn1G3WJApuSQiGPtUjRjrYB+g1ooU/ijgVni1VLdyzG2n",
    /*044*/ "CWmqAosQExttzN5uKR49ncFo4PyHCqslSFc6USgikUXWJ4OqhUGhFonvRU27kiO0",
    /*045*/ "PfAPkkRz16FF+bunpT3UDkb25PlRYsxEiovEBvNTtVmSz32ati09cB7rsXOmsI0n",
    /*046*/ "8In64WEoA44RqyIvsRM7USrULD1YaANxk+4+JW3OhLL0NwGEQytNeS9G+CCb8KVr",
    /*047*/ "fGVlyhFhQxVTSZsWvVSgccNxVHtsnARi6ExnWiErKqtsaaobNRoi0QNGYQr+G76T",
    /*048*/ "C/AoqMUzxzIF7qwBmDkPEXU4hUAIzBSfWK5/YqfxiG77sg3ZMAMGuGC+Rpap1rmo",
    /*049*/ "wJ8OMz2oFcowsQw/wzS5MPXF9L/QngYXI3QokvP7Uj+Co83Y1M2zquAfSZLCChsj",
    /*050*/ "lahTa1a5KvAV7hzPpyA9E+VwFGqjOUoPa3PVbT1ePlPGaNFJLXod88hozMHTS9ot",
    /*051*/ "ZLK8+gZtLReZMDYOM5qib1BwApxrAw0yJRadXrGwUffeemUZOCflPornxqsqZRLC",
    /*052*/ "8Skw/ktC4f7GEyiTizK0KUCwGOgPl99A9q9N864qMJKrrpu4dlfgqlQNRGCciMlA",
    /*053*/ "smSpON0oBV7496a7cgcoP/YYPKoBwpvlWYH1O4M3MEse2KNehbaGU2/Y+JbUQSsH",
    /*054*/ "UTCIWBwyD9GgrL08tSoS9T3Ahe9s8uVwJgEBIQ+Ehd+YUJ6KTJZS+zIVUcGi6XvV",
    /*055*/ "JKAi+VBL89SCVBh84Pupa/d6v/4Vfgy5hs9lYDwpBqiS1WuyQ4EVpMr17oX2TfM+",
    /*056*/ "0GMlcvRK2SsgOzz3rBH9fLFUERAxxLHAEEHCQjgZhffVY4UQbNqcFeblgIP4s2ZI",
    /*057*/ "IKk/XOB8x8U+nwRq91llADmDN+w7h2LqGJ4tBT2TZyE8TcD4jDUEuAxIQR8oIprk",
    /*058*/ "lTzBRqN6l942+BKn1jZGCSF+O10+z0XOZOKseAOZgxzIceHcusKJ3gqFqVyTTf8i",
    /*059*/ "g+lww6E6QUPHKHQt4MwGgNMTE/5pID/m49PJkr98tvh+dzUi3Yq+yniBZ4r2UIAE",
    /*060*/ "UGCEpRsC8aHR5D0aoVV9rGAm3hBWIEbr54/3PSUXi6dOW8TUzkKKrIxNz9Iw+BnG",
    /*061*/ "2P/1MENe1NGY5ZkutGjzEsnT3sEHRjOVMWLxesp6x9YyEEOmECenyJwmhWK/QfrF",
    /*062*/ "0fwqs7fC6G9SaCa88WwmM23xYPR359633i5e06mXBq0VdROjuy4X1MxUAP2Ivyp3",
    /*063*/ "w7wsFBFgOVU28ymNqeldB0kNd+jrLousOHlRYnuBDRvOM8s7dqtLTBtYF6wxehML",
    /*064*/ "0mu6lt4s8ZSm5jmx/7ks/GNd6L/cMSdt1kq/SrMs5HFMvmHbcHK/mR62XB2jC7r0",
    /*065*/ "tHNMKGH7ZTusr2OHgNiJX7CbxtlngQ96rKphpGC3J73MtgN+TxC/sZIJCHWTGGox",
    /*066*/ "WBWxGEKhJt4g3Rau63huD4MhBrdSwD0As8pcnj5TrpcJW+6r1cIvvOM6rPiJkSF8",
    /*067*/ "uxn12vB6NEgJ4oikpakgdQ75SDjPMnXKnfH7OvWjroWQ5kX8DeaBiKpbZVNkPWE6",
    /*068*/ "bBnnuceYH1ell1X1giVDJVlcQnNbJNeg4Jj/MawrFl+oq1WBeAjWkt/Nopkzaj+1",
    /*069*/ "WFpuqKeoblLgxEzkWVz7XwH7eUTSMs1tMcpJInsvonhNHOQQBG9DekqlwkZMqIoL",
    /*070*/ "84iBLfDrK+f9ypZyeTl+GGmMQrsZC0V/uhuH2LJzh3sfECmUK4/zqbWNJsvSYmoL",
    /*071*/ "aP90Y3q546woijSJdVVxLdWLIGo7Qvka1nrWUkNMhE0KEC7T4jAB+1hf4eCwFnyC",
    /*072*/ "/RgNO2W48HgG49UVegt9HQ8ipt+Jmhu2cM7QB5UusqVdTAm4NoHO7x5XIIM+3VaN",
    /*073*/ "5jLUQ9KYskBytxKSoVC31v21oME6h51vL4emCWRArOhy+sG5lpZGmiu0JIGjjoST",
    /*074*/ "uFjMyI5EweQvIAkmZTXLdvchJgZquJSUYajR4SFqFWAQTKG8Zn7voGlZgh3S1mto",
    /*075*/ "8eNCdEjKvikiKaE642NWcKB5dkwekt08/Nn5D7vncZOYMigpjCgJMvn9jhr/55e8",
    /*076*/ "mMQN79XpwEk1hTtKUCCuIEHZDNc20LGrFOFhnewknRToXVm6bOjxvrn7Xa+gKA2v",
    /*077*/ "xWW/DudxN5qcA6gn0cLUnetkw5MTfhr/zSrbQfxuheuITHqs5LK6PakRxpDgLIy6",
    /*078*/ "caFE/GT0g9WvyqLBMVS/HYPY6BZbd7NXxZHKuH3VYaxmzcoB1grP2tLmDZ3iQVvO",
    /*079*/ "ID0nYoDIT5mbNn/hKiWPGSbv9q7GU3ZwuKPAWZXujPpd8osK8kg4mKBUCGog3I+G",
    /*080*/ "/pw1xMkaU2O20GDNnXUiXLvDyf0la02VDFPV4wQ1mTJKXiiB5cSbs/t2xLwMkxOh",
    /*081*/ "oV506WTF/0r34L4tk/JQzRWfMphFmDIQ29n2EW4SQZl0bsCDIZL9rWWJgEQlbZuh",
    /*082*/ "8f6V74QQs552+lvN502bcn5zBgKUW0+e8oBqMeKKBWeYm+kwhRuyUdOhdbI4gdKu",
    /*083*/ "NysaQMfEI3eT9zqbVVjgVKXlUH5R7KnwQbuiSLalnUIN9F0z/DmAKIQLJ/FfyfOv",
    /*084*/ "veUldDKwZk04suwGihkLFcVHzjVMr80tF8qGm/qqoUKkt6WLyhak1QTIz6PG5Uus",
    /*085*/ "/W6padhuXpVWIzwNKlZbuNuACchWIl3KOSfq6Te/1tmuLWOhtIll/dN6OVVmqOiu",
    /*086*/ "pNnFq1eDE907ia/ivD8lWJVJOrssarnvK+skayqeBasKLp953G3Pf/rnEnJg/5B0",
    /*087*/ "snxqP9BTd9Q5FLi0m1i97mXUSB48CH+eA9S0JJus9JlqDBo0txgeyqpIjfqK1CfZ",
    /*088*/ "8mB0CeTjxMqh0Yn8Sx+jWfEl4fr4J5B+2BP0VoG2PmSCOsiEX1JkbJKSmUiVoJet",
    /*089*/ "PXu50RS2i7kE0Fk5kVllaBlR95KiTh1+0qrMXakHeZgaAwUGTENnA2sMRT3HXU4L",
    /*090*/ "gRLA5GEEyZ0OBsG6C0piXVx70fkSOgBACvJW65Ukx70wpK3/xE4WUsYpreuxYBav",
    /*091*/ "0XUJoPMxJs9aYZjFR9lXxLjJB/zJY5OTGIxnSSEucTEr27dMesgzvkjrTCm/5FFT",
    /*092*/ "dzrPAQMpS4iEgAvE6yB8aPpQFHBNg6WdxdKeUt+1BJl22YpUQbS2NtgCIvdlrA/s",
    /*093*/ "Z5YxFcVuY0kKvPLJtiM3fmutznWiMJjcwc9FVSs8wKDs8c44lG4geX3Li0HSSDoy",
    /*094*/ "5xYleZo+lNXhmw8UxdhkXgXapHwcfJAcyd/bJ2mugv9Oc43vN/p4OvVgdL6RBO7m",
    /*095*/ "Yy4zhE4aylilMKUMMJ79OhddDjlhlsHT6qd0kCk5pQsYpCDtOkzXPEtQ7fIDylCL",
    /*096*/ "/vmp7VLQA6CgI7bL+0hAsRnvOk7kLILFlU31xkJTFo2f/x18wm60KqssSN2ujFaO",
    /*097*/ "pmaUpXpBr8d9+AbpPGr1FG3IDcLQldwiJMviIvjPMrZ4dikuUGK1H8ZSxltnHDsX",
    /*098*/ "hTT1sIRAGkAuTSRGBwDFuWUAVdjnPDVzj9JvU3JMmj2cGj10x11Bvb7WvDqWwerr",
    /*099*/ "8yzcStcD0D6VHSkK9iDFFRiQYwdENJVaCNnU5TvGlimGsuYQksFvkYXHZadZjRKU",
    /*100*/ "0qAsOkKmMw1xxSP1fO+MdJoWNMqS6VkRodL2U7Rp4YmuZtPsjkNz+DQk66vDvFui",
    /*101*/ "a0+BQEOJYUK+UB9xgUpLPA1CuZOvYMjQvAJ0Lrv8tCC16IDYNrsTppmNeLriMbt2",
    /*102*/ "2DzlQPpjk2Mv3xEMY3Wx4Zw50hSdwusvmStQRSe5ktIp5TkKd2+1m2aBm7IneRq6",
    /*103*/ "IaHAWIYMCaygGQyTDQmmHm+VZNQlq9uXzGx4aTI65mpoPwQIA0O1iRuxu8YseR0X",
    /*104*/ "2y9zgsl7TGYoID+raVDHWhS9ZFKUazSC5fElQJ5OAe9cZtedB0UGbw/NH6wGJ1u8",
    /*105*/ "+KMYTYQh8ebNJjKGixfhtgPo98an0k2dXnLnC2nLr/sOZ83Nc4bWXXi78HteRDa1",
    /*106*/ "GSTl+EjbcDEQNGOB4XrvkEJNMZ14P9tmUtgDG9T82G0CFZDYPyaxpesDgvUaSLME",
    /*107*/ "mDwhR1Ua7NLpHnsB3TuhFOjyMvtapa2vf1h0wWFncInax4QPAEx4LYiyL5h4cOro",
    /*108*/ "VhmfXccAS5mlR6BkoUp3A3K7oLmfyJwaBIGl8nOK+OMM1xBDvmYr5eBdro9eYc4n",
    /*109*/ "zbOz+JGi1MO4QPrdKc/yKrKwaksfqpovU+Be1DqEtS9YaIH6UrhNsfCD5BsHmJmH",
    /*110*/ "VC2tCGYgPsi2MhJ4s7ui3kSIRAsmcdY+Vc1zEgA9p7jzijnDzYmJeoZoQ61fVo4k",
    /*111*/ "63jkwS/rA/uxXsHQF5jXPdfRFc4cRgeMO8q3kZjE55vN1OXpNyStJWx9WwkWmR5m",
    /*112*/ "dL2koYIpsFchoMlW2WXrnDSxCewxjxrCggHXPXJ+3RHcpT8twKcOulSVGV9b+a4y",
    /*113*/ "VGZ1fW86bf1TLNPvQSxAf2k99oo9LOHbADWuAytn5JLBvIea5wu/vmKTdhtFyNDg",
    /*114*/ "xEdEQlR1QPrK/3jcuW4nOBGhkuNACwPchnm/M7cpc47cgbD+uiDNuE/CBKZA5C9/",
    /*115*/ "4VusmFZqZ8TjAH7OBA1s2S1do0QK91qLYGM3/pYX+BqGRum2JygiGeDCKKe6O4PQ",
    /*116*/ "MnnkIFa1XSCWuHMESPm8PfTxW+mzqZZTUVyrwT+OoYQoUYmtn68PG++/4WLsanfm",
    /*117*/ "fZfQz8Axd1lk1Aczm6nlaOHRdAjKWRrLuSe9g2DmkX8HdTAq8rwEEEbh68Ay+nPE",
    /*118*/ "oCw4UvFzLY+iy09IMTbbNoVLU1isfY6r8KzcS/aD3Ml67ASk1YaK4X6uzMsCgEz3",
    /*119*/ "OEixhcnns6sMEC6wkWlSHvEuMF92MwO2KIBqCRFyAoKKt98yPLZf20TSaKo2Dsnt",
    /*120*/ "VvwE6EyC+NupCQXfzTw+gyfrsggdkxLGOVcOQHblweipuUEObOFGQC9L5DHmRCrV",
    /*121*/ "qkE/hqgC93u32QjqFRMcRHsolcJfaVsX53zFHQKnxP+lNQ1cEC4PrsPQISHCyWaE",
    /*122*/ "nDNiV3oryKbz0abm24v9w0EbBc92fuOYoJ/TVDJEofwS+4kgPA2C0SsOTRFAeSmm",
    /*123*/ "hJsmW4/oqJEV+Tm4E73lXPmTB1nfutNxXGMvH5p5pWG+/AwO545uy+FIzNwyhVF6",
    /*124*/ "zqzYOMRZYe1k+P9Ss0ctvfOw2OtN/uMAOa5fBUmNSMhQdmU0fsorCMEjT/suJ+8s",
    /*125*/ "UCmqiuy6qQLaQmrPnAjDBLEXrqsFELtWZ983S+u2id+rCymw1+hFxk9Qm1szLf66",
    /*126*/ "MpyswU5yZJgEZU7ul/430PHcGYZXas6wqVHUnvWJoC99iY+6RtinER2dJmi8S9yw",
    /*127*/ "7Ht7KVVis0ehfkUrzSayPQE5lRvNRdq7GsmY2xDF5SR+G/Oeh05e+tl5g3M7LSGi",
    /*128*/ "WU3C2RUP+zoeaTyEWj7jRWX9b7+/z1hZNYHcA1AT+qt+cJX3TTi+Ot+CVyHytJuO",
    /*129*/ "R0sA+OjOXXSkzdIKh2a8k3FQJhf+c6DyW0r348PrLVFqQk+6WE8c/UuEDOlUvAIi",
    /*130*/ "UVEc7zLkTEgAWVCklNXqGG4dmIjdV4+kCbgWRSoQnkUboogXoMl++Z59U1rCVqO8",
    /*131*/ "f30VfBdo/T6jG3waFUVfQnOsaepGiS4WixoxA/A9taDyob/Q8/ZhXOuswdOlPZLt",
    /*132*/ "xp3+7N7iUHzXCNpQlgn4F9QDB5SqynvI7Rnsy49JgKvZA/Kf3w6VeJ4DSB+vyLut",
    /*133*/ "dbXy5JFkSQhjoqyg0h5tBo/clMO9tWG6UB5/6RJjM+RHyhfSFbt5NPfNlfYT6xKQ",
    /*134*/ "a/obRMtDvNxZuelSghDB2YkQLWKHAA1mkjEax1Re4yYiV1Aa7N6VrkI+kM+CUR+2",
    /*135*/ "rU4gZFf3A6pDdIYexZWQdnMLbeqZY/btFMwxVN5sO8dAMwp5ZNjMXJfjZM8D414W",
    /*136*/ "QsB3xVbyo+W0qSc4DjBBWwStXPyOig/oKZResblmeP/iQWjyQOq8wdqjJbxK/+Rb",
    /*137*/ "BEwwnUH7MsmK+JF2SVZ1YmJaXGHoIZ0UKfBP5bIHU2o5AfTTy4e+HKBQGBExg3yG",
    /*138*/ "oJCkgk2ScJSDcmwkbkR1bwHxnDr5EUm8vKQihcBcXtGvMEpc2W0ZkbeP54hPDbug",
    /*139*/ "KNGCbeF82skVff17uZbKBybJGUtKpj/WxxALhzcYKNGH4i/uh2vjsbqzSqgNLE9j",
    /*140*/ "YPTL+fOscti9K3ZV3X91FGyzpGDwaqUrjnuBEpyJk9KzYMA45XXS5JewTTzfR03Y",
    /*141*/ "feyiUN09TF37qrDvEKS0RMopvdX/SQY+IIut3eHM2qGBzg31VFm+CUw4YMKvOS0I",
    /*142*/ "lHuip9mmemPsFXSENbm6CSCJ1+AOPYhxu6C1RE3LlUDjHT7ZL4PhxFLSfdLJBx4t",
    /*143*/ "DHLL4hX+j3j3aIrpgIPxolu04Tkq0Y6I07vSr1rrRyGZOVqhx2Yjim7gbqkah9uV",
    /*144*/ "cCQvX8iVsV9W4lzLHUJCsZX1T1k4Yj4tv0I3pB954G0XMp04TFZ/RMhH53bLXx1C",
    /*145*/ "TrE2nFTcm1pIvY4C5eVMyE2Qcx1oUE2IXrSUTJIsoqcmlKOAR8qClV7KWNrf+gQu",
    /*146*/ "RK6V5ZlU6/ARCw++DHmYr7c4CaXsW1MlSLu9CH9al5HcFI62WUiy1qquurkUMn6C",
    /*147*/ "flRXFkCoy/NJzShsW4yILXlsrjkq8tJ/M2wGW7TMQ9EWKpW957ClmB0xKP5eU7HW",
    /*148*/ "m0L2WbZCr4JdMdKPdm4sLbHGdU1tCzwd3b4LCiYOvWqagQqZWCX7hsRJyM9Zd52/",
    /*149*/ "XKxYM5jAFvncw7fJ5ZAnSdRFpR3vsMrUEug1Jbzz+bJ4pa+yM11TyAGfw55xrGzU",
    /*150*/ "Bb+3kGn+pJro8A+Q8FLWlyppLt5E2dHlmzemsy+qOAq2WG0UZR052xJtBoNpcrZ1",
    /*151*/ "mWkSW/WE5/eV2qMkjeW39VIPbcY2Epi2oTbniAyxRA12WrT67SUKBueL2PKf6Mo8",
    /*152*/ "/1bjg+6zxMvUtz7mnTaDN285w67eDTFqTMROKZ45TYFfhW6SQntBS/JZzI//+xum",
    /*153*/ "yU2E5pB9Cg6DZ/tdDeZwyO0tJr1SD+lj2NSFpuENotKzXkIoZqwHw2V9IPYR1LKk",
    /*154*/ "BPB0xY2hlaeKx0RiNpogxCrxOifF4dyOcEL3CD5ZhN0TBVMp+3urtkcqVQaShNdr",
    /*155*/ "d0X95k+in+SeXY+W+N83xgwTGsUUfmcTU4j6lp2rfdHeQl0Y4QgGDMyTygSDMvsz",
    /*156*/ "d1BnKRuWoI22ULNgwuJHfibpY9Fh9D/rOv+MWmdI99bmZZ+RYdGHGE/YXPMyMWOB",
    /*157*/ "xPgpb1aImaqAHs7lE1zFjCI4TXIEbzpgbMKBjiv/cHS+/MKbDKwxiCcCcw6X+2Ww",
    /*158*/ "RsBZ4Dd3etKm5tybDLHlJ3/HNl1Wgl9zDQtcVE9Ka46EpaH49azSCzNK+9qZpLfk",
    /*159*/ "oqNnTmXCEyAYPJT2kIp3OokhKKD6o/4D0x1eZFChCBiK1KkFUPGd7SUqVrr3ZVqg",
    /*160*/ "abl09ZCLxxawdYOxVESlqk1kgyJDay+zrd06D8sG5XLtwDD8rM8lP1IbZHddIk9Z",
    /*161*/ "PKfgNI4zij0pVanntZEp+z6BqsB+T7yT2NINy8Vzcvzcceiz/qrYb5aNK+K3T4gV",
    /*162*/ "C6MfuzZPzeuI+pzH+xJl2oqLL5w8sQ0pgRHpcQ3el0PooA4PxirHkiWzIfuTPtVr",
    /*163*/ "RPwn6mnipwEUzuInbZruuezITfSwOeWcSCCRo2YLdpPHIhRl3qRAiUO8ajfiJZNH",
    /*164*/ "rXDoPq/ReLm0v8K8OSAQGqe1L/hn5Cb+GBU3iueqonoMA/4OmEnAplXPuTFaFlvO",
    /*165*/ "83te+g6neeAycMwB+BUSWS5qQTFSSOvGtPc9MVBVAXlxkcZweui+bTCYrY87Iqmz",
    /*166*/ "CizzayTFZR6IrBJxiHFvdDqATB4N7mg3KkfZF5JaKBPaL7nFPmXTUBYbHBIlgdDT",
    /*167*/ "4MbXp7hYZrImWKf2uLq6mC8eV3xb3FwMFTx84jV8daAjU5+Y7KVMWoExNdEXCQQS",
    /*168*/ "ziAPHV0/PCj6gG6n9/7vNXtgCrZvwoTCq9RRMZdBXPSk5oHG30kE30ApvkQxkk6f",
    /*169*/ "CWvFSIO6fqO7oVAhr6WkGwJehqHs4jiFT7XmlPDFcOzMHC8+Di9TKGckUoyrgaRq",
    /*170*/ "7HT0ZMzLa8uOyZmiLclqsBhA79HXqgNn4r9DecDJdPZ7mtZiufma8zFG+tmIPFYs",
    /*171*/ "ic9q6wPvn5Hj2wmG2iJ+bJ6t37jm4qEfzmznhDXMlasV/rPCqNoEHZqInx96AEMd",
    /*172*/ "dBcIiVeOgecOnmWvKURwwG2W2bnsynOjk/ROYPtbsQnr2DCNHG1BN8GwW8kMnOcU",
    /*173*/ "CwIqFF9HT1Kar0suulFkHG6vGkqZnVObE9GXL+RfJ/TDCedhfcAnxLIV+S8i38wk",
    /*174*/ "uGkWjX903hRDLdaFG1MOTo3hohvXp+J4vz9DsYlrlB14k/hz7YfjAMYyqIOCKplS",
    /*175*/ "nQAhy/tp28vqaYJO7P3GDj/R/omqCNl58D4QoVPlSHVEyV4RigTku9HfvX+/Dsbh",
    /*176*/ "t58h7KYqUiTa3d6l6FLJePCdkpfv+SIogrZYgh2dDKeTHjRtZKw3iw5evUv/NHzW",
    /*177*/ "WkK8+iLNcOdcB8Ws0zScfiNmx3uMp/8K8gMshVGY7U7+JgTmbuwDck7cIlC4zxdl",
    /*178*/ "oZf5UJb4gRWe0wf0eemc2z9/NDkOgNQKLznRn41bw8BDrmdhSolN58GayuP04mLU",
    /*179*/ "h8dBW1xU6gWQxgRhxS3NzstjyWx0wDdzsbg28YGL8P2QKcdZIYZ6fy7tsGwbEdkK",
    /*180*/ "ZwOSKgN45W9kIYNc5a7vSVfvWjaXeRWze8YDyRdJ+Jjze6Yq2nXPdaTYg562is3S",
    /*181*/ "oDXjxLWeuWWAUiUnknVqSMDqho9VO3pP8NuGJsyJ3wMRo+pOFpNWqQnbW+8HkxTT",
    /*182*/ "QXBSKbVhMmVBkniayp5Vmnpn6AkO/zFZ7FgU9P061fYe+GvpQkS5An1cqR9GG0pc",
    /*183*/ "VmoJ87M9+ragQfFpg2cerYhRXu2pjXCB7R2oN9Mp7uLAN5us8HTs1zdgx6NvWngb",
    /*184*/ "M+0CgmE9Fa7dRl4YFRHp6LxyQzY0utkFPeHbm2LhLmfLYUpiqF4v/DVQkuOLGUPY",
    /*185*/ "ggUT/MH36LxytMXFva5xpZwekYMFxwh/WNmpleoWvPRyLOrdaz3uqYP2TZl0G2Ub",
    /*186*/ "HUbqFtrZpxOxMtxO/ATPf/iChRM5fGBmkaBzrW5UMYj99dFJ88Sk2Ns4FnDVyXVJ",
    /*187*/ "j8cOH6SmCr/zJgJJT/Yr3Dg10PKqE6PNY1pZYETauAS6Y7ebchs/onJy93Nqc5P3",
    /*188*/ "Om7fv640ozuy5aH26jcgIeBBvyAZPEsAanBiqFsbodir+BVzAuV5ZT3hVG27nB88",
    /*189*/ "16KivQLeJL7e6SfgSKZpTcWQvXNTKrz+2xSkVQ6sx0LcnmUht2JZ1iMN+3MuG4NT",
    /*190*/ "lA4IlD2M5j3ch+BoyAueHVyzcELxHq3n5WcPPjfPFJoA5rfmq5jvAKpOIxgfPzWC",
    /*191*/ "HPUsk55UNGAH1LQ+buPiPD8esyLKgLqf+JOtjKyuLhTynJDlplw9XbUltoK0cCwb",
    /*192*/ "OBlF/nciIbza9D467zcW4tV6zlXRcJzD+DofSXjcPlzfFn2Em1xAGnUYKW4Fa0QP",
    /*193*/ "3OG4WMeR12nKsLgSRajYSbwdBl6w93QkbT9Jsf+XnKdyl0p2e+e5b/7YtkxhkxUx",
    /*194*/ "J16k1XeNf/ZyZdJYfyijF4Ag5ZXlkicYkDo3LAW3FX0zB5Frl/JsUwTVyzq0g+Tw",
    /*195*/ "7ieO0FHjHp9QHCUBAY8Vdvpn3i/SnybBXj9vbqIwGWxxsJajqqAqo9mLkxaUWXpJ",
    /*196*/ "Zxd9jvAWmVYlx2XxRvAgq9oy3sOvHEy930wnyhz2Gc9590YEyb3rTQ6bQgcuUgcN",
    /*197*/ "H5LzcvuV8rDugK2fp9+SxqaNI+ApFgFpLO4KkSKvRgC9nUrJlLved6gDiu4QEUBL",
    /*198*/ "i5/WCMovbf/PWipx8SpZl6YMuwPxClSdEI8ycuUzWdWn97Avyhhy7K1SMVjOThWN",
    /*199*/ "+o6xu6O272xdu0itNwR65LRz64zTlZasBmmwzrZoVE4fWfFDewBXOlEmHNIO8e0W",
    /*200*/ "ayrprkyhEjBuezkWCi3Ox7Y23WxnHc6yRT6MP2j5Y/VDlHPuQyMRPHtFMQw4Nv3S",
    /*201*/ "6Imc5+3XghCXxQfYiMDRV6/ycsfM6Vye2bgb9srRCtOknJOmJNBAHgTxjTXr24VJ",
    /*202*/ "5MWbwD+/bmHtZ7NQ2sdJqbnNea/4nigMaWQ5XzowI1y4nWpVf3IWM/zDKTKU7My3",
    /*203*/ "rl5GTcC4tLmYd6pUbYNE7Y6R9Q9f3PemI06O9sDRDXCsImJRoPryS0KGNAJg4io8",
    /*204*/ "KlN5i4fOfop9SWsRNjhhI8cKwQSYXmb+21AdYEm55kWSrvGHSJ4qW3kg/6RL+X9E",
    /*205*/ "YIBYHxvtHOPnG9VwzhgK5vPhogEeisBifOfqh9azjgAkQhNU8qcBHaDzVm7newB+",
    /*206*/ "S4wdnimVGeOXzTthUOb70W3ABqg2Pzwdxqn02cN48kkZC+pfjlGsDtpuoMmQozd9",
    /*207*/ "PoEn2D4qj+N+VHXSCUzNxda+Kj8x6PAcXmzP7Efoz549JXTJhIHmYPhm3Wxjt2rt",
    /*208*/ "g+xNlU7cybZ7Ex481IZ6M/LUT/3sXBphCkmfJcbgq0/5/hB3EZNDJ5G1Kd7/ZAr4",
    /*209*/ "NoGDR7SVucrJmGnWIO66+AcrTTaRhn8DEPhJSYL+EfdE6bRzJ04bDSleT8X+JLr6",
    /*210*/ "zo+WdCkLjDD65/1kK+hcMAecx3r6V7nLsV98nWmxi5NZ2LRS1l/8TVSzmh3Cf23H",
    /*211*/ "ubK23iqdPyHmp4uA3hpQCh0SWK35qfHhBwPT4+lM2uEuwlG97vCPT/ACycB5Xa9e",
    /*212*/ "/Sn6hpRr2GYbiMZXw/pZrKY2bqOVVcVr7ANRMW3wKxb3Jh9eqvZsEiojypzEgPCd",
    /*213*/ "/kKNPMrboiYpa3T7QMudoLe56bMGdwDLN3jIJ4UkzqueYUvX9T1egjCMtZyd/Nfy",
    /*214*/ "4xsUIbpGpVyYqjTXa3GIRaVXTa+a5u5KNEd/2MvYHuC2TxpgnaU6JPXg57tNx6w+",
    /*215*/ "En7TGH3MPRIDnoRZm73XqZfIE6YDokSJUsQu7nEiYRcZIl8+IxzBz/D9+LDhfaTw",
    /*216*/ "rChY6DsmhE3Pk3MP82hXxHAK+PfAxEwN/mVphN2AeAHMjea7LZ+8wzY1qkfixzbC",
    /*217*/ "w1Tat7jktI4JlDjRpicU+rnwGYurSUR0lNsLLSvj+2v1T2zgtj4xkY1XeOhPpnAB",
    /*218*/ "9ZQ2fsEFnheLL+eprp1ZMfMnIDWxBIcCmvBuW5f0ttrnj268CnM+XtFjR0FHNnVB",
    /*219*/ "irk0BC1Put2s6trzIsW6D15xMbvUrhXTJVSe73g9H1zrN/aLLVTduBzOleDuoqhf",
    /*220*/ "Gt9+ETucUYdGbjBLkmnE99Y/6W7VWcjS+0QotF2XQ35OOYME/+XstpgzHumVJdYC",
    /*221*/ "vMfUHxESaDJ9GtjCokSVCUnP7qwSuym0yF/RqgwIFvnA4HMEGb4U6BD0pl9spkWC",
    /*222*/ "Bh0YMx31KHz9JfLWrL/hwspYsD83d3RttA+6rKQgMScvP7yQIeJA5zCIdWUH9ffr",
    /*223*/ "sR4VXGa71KlXG39XMuqhxnrI0buRACrxpQYNbSbr7VIGg9MieUWCZuH/gawDgCCe",
    /*224*/ "7hTMj/9tRYg4Y9H5E2jct0DNGWebd0x3zrZ8VmatHkJhc7FPb+YE72fuuJX5B4xw",
    /*225*/ "CmYVUgZsUf1tQnwPXvyXvInjXLXa4nI9/YlyS5KXu0il/XhlR8PbAVZtFCVJtGRU",
    /*226*/ "NkBz/ihftBI8TEsXLYWrK/oq0aDw9dPwsY/4wI/OCT4nAmnPBeQruqybXq2tzQAx",
    /*227*/ "8/DLFizbxUODFq8Ae/dYQUpLrtCISI8EXx41FfiYrTYCeh+vnDDWx8T2tEVNUvxO",
    /*228*/ "w9IpqeBgTyV/2HHCtOaqrqoCojpxDNzQfgIDuNoEUNch9L3ykP4vgnK+mZWd/5iZ",
    /*229*/ "GECqPT1v8vQW688zR8yjY90LrmDrCWJZ52PY8Pm3vENYf3QfldAFZUctEHof1zSa",
    /*230*/ "eLqaVApmBmqQsVMTCPE+Jg17pUsjNWcJwIzOkwISTh1EfHAq2DxKTjQpNwDuJ5Bp",
    /*231*/ "2ttw5vyDDQ7eed83HdcEnwdmRDVQ00OUV4SIzn24HxAYfAUkkvd7YsvMP5X9AEDc",
    /*232*/ "peD/ydYBaf/vbd8F363aLN6769N29NqYssVCzjVx05JekFHLcn0YRUJeRKwowzSb",
    /*233*/ "MqVxGCJPO1nZB0o+x+5YW6Y7WVGbV6MU+zaGuWodfC1xQS1YxvNRm5O/+8c+4itI",
    /*234*/ "MskPPh2qiM9kApuYN/AYIZyercSDrH2zqiuqR8yU3qzNg81rwjmIEdvJkzE6hLUy",
    /*235*/ "Jkyc9euUNifCSA3l3m7oQ9s8ZO2TcPlnzq+H1wFSr6T6VaxDMp/oiC9el4TKTMpI",
    /*236*/ "NJbZkDc98geePpcJDBdSUx8YCNLv6/dPuH0XjtR+CV3V7SVC1TMyyM12DDYamLK9",
    /*237*/ "rWMfwjW3e79xyZobuOwq1CudYVaVIIRBN7dKso0I+1bN107MF5BF7/PUAgF1Tolo",
    /*238*/ "TIZGFuEJMOyzlokhvm63q4Q2Q4vkZkOkWyCPX5vNUAJqaoZ3IQL0N9+ZvUa0jtwh",
    /*239*/ "2xMDpS0Vpg6iKn97vfwYS5FA06QuvSClQTQyNgjCk5Ifi/xEP6ov94d6hwwiqeca",
    /*240*/ "h76oi+zn8qL2LcTqOE94md6lVB/79RjQ6qiJjxKK244lCl8AAf306YSjQ/SQUIb2",
    /*241*/ "yLZEjgLxjWROpY5YEq6aI7JX7IoJRTLHDrbU+DiZtjmZf8wYoc2M6a2ZyCWcNGRl",
    /*242*/ "14yuEBkHuu7rjHFE5NQTrsBuESfqzDhaA5VEuVD5JmYtKtkIDL4gTdudhJrp1pnA",
    /*243*/ "6x0rVwnxbbknNlDvHvpOza5mhxMrw5Igyxz8+gmEc1/Q2xKHn+/OSHnG+Gp26CBK",
    /*244*/ "MWVHd4YN+hP/iiH6EQNW9hnOgCf1nYLd9eSZPd8TKqjIRHh7ic9wVcrMbM12uuC0",
    /*245*/ "iMptWb1YY17EHcGXSaiAxJMnFsSh/b1EtoGQNSBZV+qxqELevU1Az/znX/cGKrdt",
    /*246*/ "aY9rB1ZB/i8b24U5Z70IvnckcTgjsfsuI8LLhsrG2sMhGVzGHRTwAAgWuBZoVUtp",
    /*247*/ "PIvyVyTvDFmzKOwVYcW2CbCmufAeaDg9buhp8ofmbl2W9NcE6R/gNudWelVZTDh6",
    /*248*/ "9KeHIw/sBhxNld8dWEHEoUfM4dQlFPphvZgRgKecfLq4RoD0iXOcMFY6H1jzEcVs",
    /*249*/ "VshA1JaS9FA1uBlz8tosl4u3piqGXTUtOjSz2q/FG68UD67oEhxCS2DGGn+VLVk3",
    /*250*/ "0w9eJqZcpKB1y+h4as8jRrdXXlZMhlXQnr8DWNyHFJsky1UbVl+42X/mZEoB4TlB",
    /*251*/ "w0B3Y7qqNCbK/uvfOg9J60Or8N0vk2i5sun9/EAfSEolp5wq99MmTpo4o4VMD7lZ",
    /*252*/ "H/DE4bOdhS1JBfklaMuN97w8hHlvnWNeZOWwMtpmOAYjafQycH3BHRymJfjYn89k",
    /*253*/ "SIbcArp93tJ4PEL+TguGcO47gDxBRggT1ww31xvl75eL9HY3xlByZ40Vardou9G7",
    /*254*/ "O5uhd2nhnjoOErIRHr4p8rEdw0Pk5rS1vv2VZZx/0D00fFRnq41JtBRjFrnR9EOr",
    /*255*/ "M+Ld4p0X/Ai6FMaAdoKhvJxFrw0oKVIspycF7MQrUhvN2yO/JVwShPuDPxFE0FB4",
    /*256*/ "vcjoQTuOlh1n1+57x7PwUgqGn0c9Ixa5Vr7kINo/685rjPJaonSP60lOnrWkP8G/",
];

/// Word-permutation selectors, keyed by the round counter.
const ROWS_MIX: [&str; 256] = [
    /*000*/ "BQMEAQIA",
    /*001*/ "AgUABAMB",
    /*002*/ "BAMBAgUA",
    /*003*/ "AwUEAAIB",
    /*004*/ "AgMFAQAE",
    /*005*/ "BAADBQIB",
    /*006*/ "AwIFAQAE",
    /*007*/ "BAUDAgEA",
    /*008*/ "AwQBBQAC",
    /*009*/ "AQIEAAUD",
    /*010*/ "BQQDAQAC",
    /*011*/ "BAIBBQMA",
    /*012*/ "BQMEAQAC",
    /*013*/ "BAABBQID",
    /*014*/ "AgUDBAAB",
    /*015*/ "BQIBAAME",
    /*016*/ "BAUDAQAC",
    /*017*/ "AQAEAgUD",
    /*018*/ "AgUBBAMA",
    /*019*/ "BAIAAQUD",
    /*020*/ "AQMFAgAE",
    /*021*/ "BAABBQMC",
    /*022*/ "AQUEAgAD",
    /*023*/ "AwQFAAEC",
    /*024*/ "AQIABQME",
    /*025*/ "BAUDAgAB",
    /*026*/ "BQMABAEC",
    /*027*/ "AgUEAQAD",
    /*028*/ "BQADBAIB",
    /*029*/ "BAMAAQUC",
    /*030*/ "AQIEBQMA",
    /*031*/ "BAADAgUB",
    /*032*/ "AgMABQEE",
    /*033*/ "AwQBAAUC",
    /*034*/ "BQADAQIE",
    /*035*/ "BAMAAgUB",
    /*036*/ "BQIDAQAE",
    /*037*/ "AgQFAAED",
    /*038*/ "BAMABQIB",
    /*039*/ "BQIBBAAD",
    /*040*/ "AwUEAQIA",
    /*041*/ "AgMFAAEE",
    /*042*/ "BAUAAQID",
    /*043*/ "BQMBAgAE",
    /*044*/ "AgUABAED",
    /*045*/ "BQIEAQMA",
    /*046*/ "BAUDAAEC",
    /*047*/ "BQABAgME",
    /*048*/ "AwUEAQAC",
    /*049*/ "AQAFAgME",
    /*050*/ "BQQDAAEC",
    /*051*/ "AwAEBQIB",
    /*052*/ "BQIABAED",
    /*053*/ "AQQFAAMC",
    /*054*/ "AwABBQIE",
    /*055*/ "AQUEAAMC",
    /*056*/ "AwIBBQAE",
    /*057*/ "AgAFBAED",
    /*058*/ "BAIDAQUA",
    /*059*/ "AwUBBAAC",
    /*060*/ "BQAEAgED",
    /*061*/ "BAMFAAIB",
    /*062*/ "BQIBBAMA",
    /*063*/ "AQUDAgAE",
    /*064*/ "BQABBAMC",
    /*065*/ "AgUDAQAE",
    /*066*/ "AwQFAgEA",
    /*067*/ "AQUEAAID",
    /*068*/ "AgQBBQMA",
    /*069*/ "BAAFAQID",
    /*070*/ "AwUAAgEE",
    /*071*/ "BQAEAQID",
    /*072*/ "AwIABQEE",
    /*073*/ "AgMBBAUA",
    /*074*/ "AQQDBQAC",
    /*075*/ "AwUAAQIE",
    /*076*/ "AgADBAUB",
    /*077*/ "BQQBAgAD",
    /*078*/ "AwAFAQIE",
    /*079*/ "AQMEAgUA",
    /*080*/ "AwQFAAIB",
    /*081*/ "BAIABQED",
    /*082*/ "AQUDBAAC",
    /*083*/ "AwIAAQUE",
    /*084*/ "BAMFAAEC",
    /*085*/ "BQIDBAAB",
    /*086*/ "AwAFAgEE",
    /*087*/ "AQMEAAUC",
    /*088*/ "AgQDBQEA",
    /*089*/ "BQMABAIB",
    /*090*/ "BAIDBQEA",
    /*091*/ "BQQAAQMC",
    /*092*/ "AwUBAAIE",
    /*093*/ "BAMFAgAB",
    /*094*/ "AwABBAUC",
    /*095*/ "BQMEAgEA",
    /*096*/ "BAUBAAID",
    /*097*/ "AQMAAgUE",
    /*098*/ "AgUEAQMA",
    /*099*/ "BQQDAgAB",
    /*100*/ "AQAEBQMC",
    /*101*/ "AgQFAQAD",
    /*102*/ "AwIBBAUA",
    /*103*/ "AgUAAQME",
    /*104*/ "AwIFBAAB",
    /*105*/ "AQUDAAIE",
    /*106*/ "AgAEAQUD",
    /*107*/ "AQIDBQAE",
    /*108*/ "BAUAAgED",
    /*109*/ "AgQFAQMA",
    /*110*/ "BAMBBQAC",
    /*111*/ "BQIABAMB",
    /*112*/ "AgMEBQEA",
    /*113*/ "BAADAQUC",
    /*114*/ "AQMFAAIE",
    /*115*/ "AgAEBQMB",
    /*116*/ "BAMFAgEA",
    /*117*/ "AQQDAAUC",
    /*118*/ "BQABBAID",
    /*119*/ "AgMEBQAB",
    /*120*/ "BQQDAgEA",
    /*121*/ "BAMFAQAC",
    /*122*/ "BQQAAgMB",
    /*123*/ "AQAEBQID",
    /*124*/ "AgUDAAEE",
    /*125*/ "AQQAAgUD",
    /*126*/ "BQIDBAEA",
    /*127*/ "BAUAAQMC",
    /*128*/ "AQIDBAUA",
    /*129*/ "BQAEAgMB",
    /*130*/ "AQIDAAUE",
    /*131*/ "BAAFAQMC",
    /*132*/ "AgQDBQAB",
    /*133*/ "BQIAAQME",
    /*134*/ "AgMFBAEA",
    /*135*/ "BAUAAgMB",
    /*136*/ "AgQDAQUA",
    /*137*/ "AwIFAAEE",
    /*138*/ "AQUABAMC",
    /*139*/ "BAMBBQIA",
    /*140*/ "AwUEAgAB",
    /*141*/ "AgQAAQUD",
    /*142*/ "AwUEAAEC",
    /*143*/ "AQQFAgAD",
    /*144*/ "BAUBAAMC",
    /*145*/ "AgAEBQED",
    /*146*/ "BAMFAQIA",
    /*147*/ "AgABBAUD",
    /*148*/ "AwQFAgAB",
    /*149*/ "AgUDBAEA",
    /*150*/ "BQMEAgAB",
    /*151*/ "AgUBAAME",
    /*152*/ "BAMABQEC",
    /*153*/ "AQAFBAID",
    /*154*/ "AwQBAgUA",
    /*155*/ "BQADBAEC",
    /*156*/ "AwUBAgAE",
    /*157*/ "BAIABQMB",
    /*158*/ "AwAFBAEC",
    /*159*/ "BAUBAgMA",
    /*160*/ "AgADBQEE",
    /*161*/ "AQMABAUC",
    /*162*/ "AgAFAQME",
    /*163*/ "BAIBAAUD",
    /*164*/ "BQMAAgEE",
    /*165*/ "AgQFAAMB",
    /*166*/ "AQADBAUC",
    /*167*/ "BQMBAAIE",
    /*168*/ "AQUEAgMA",
    /*169*/ "AgMAAQUE",
    /*170*/ "BAIBBQAD",
    /*171*/ "AwAFBAIB",
    /*172*/ "BQQBAAMC",
    /*173*/ "AgMFBAAB",
    /*174*/ "AwIEBQEA",
    /*175*/ "AgAFBAMB",
    /*176*/ "BQIDAAEE",
    /*177*/ "AwQFAQAC",
    /*178*/ "AgABBQME",
    /*179*/ "AwUEAgEA",
    /*180*/ "AQADBQIE",
    /*181*/ "AgUEAAED",
    /*182*/ "BQQBAgMA",
    /*183*/ "BAIFAAED",
    /*184*/ "AwUBBAIA",
    /*185*/ "BQAEAQMC",
    /*186*/ "BAIDBQAB",
    /*187*/ "AgMBAAUE",
    /*188*/ "AQUDBAIA",
    /*189*/ "AgQBBQAD",
    /*190*/ "AwIEAQUA",
    /*191*/ "BQQBAAID",
    /*192*/ "AgADAQUE",
    /*193*/ "BQQAAgED",
    /*194*/ "BAIFAAMB",
    /*195*/ "BQMAAQIE",
    /*196*/ "AgUBBAAD",
    /*197*/ "BAAFAgMB",
    /*198*/ "AwQBBQIA",
    /*199*/ "BAAFAgED",
    /*200*/ "AwIEAAUB",
    /*201*/ "AQQFAgMA",
    /*202*/ "AwAEBQEC",
    /*203*/ "BQMBBAIA",
    /*204*/ "AwQAAQUC",
    /*205*/ "AQMEBQIA",
    /*206*/ "BQADAgEE",
    /*207*/ "AQIEBQAD",
    /*208*/ "AgMABAUB",
    /*209*/ "BQIEAAED",
    /*210*/ "AgMBBQAE",
    /*211*/ "AQUABAID",
    /*212*/ "AgQDAAUB",
    /*213*/ "AQMABQIE",
    /*214*/ "AwAEAgUB",
    /*215*/ "AQMFBAAC",
    /*216*/ "BAUDAQIA",
    /*217*/ "AgMEAAUB",
    /*218*/ "AwIFBAEA",
    /*219*/ "BAMBAAUC",
    /*220*/ "AQIFBAMA",
    /*221*/ "AwQAAgUB",
    /*222*/ "AQMFBAIA",
    /*223*/ "AgQBAAUD",
    /*224*/ "AwUABAEC",
    /*225*/ "BQMEAAIB",
    /*226*/ "AwQABQEC",
    /*227*/ "BAUBAgAD",
    /*228*/ "AwQABQIB",
    /*229*/ "AQAFBAMC",
    /*230*/ "AwIEBQAB",
    /*231*/ "AQQFAAID",
    /*232*/ "BAADBQEC",
    /*233*/ "AwIABAUB",
    /*234*/ "BQMEAAEC",
    /*235*/ "BAIFAQAD",
    /*236*/ "AQUAAgME",
    /*237*/ "BAIDAAUB",
    /*238*/ "AQQABQID",
    /*239*/ "BQMBBAAC",
    /*240*/ "AQQDBQIA",
    /*241*/ "BQIEAQAD",
    /*242*/ "AwABAgUE",
    /*243*/ "BQIEAAMB",
    /*244*/ "AgQABQED",
    /*245*/ "AQIFAAME",
    /*246*/ "BQQDAQIA",
    /*247*/ "AQIFBAAD",
    /*248*/ "AgQABQMB",
    /*249*/ "BAABAgUD",
    /*250*/ "AwQFAQIA",
    /*251*/ "AQADAgUE",
    /*252*/ "AwUABAIB",
    /*253*/ "AgMEAQUA",
    /*254*/ "BAUDAAIB",
    /*255*/ "AQQABQMC",
];

pub(crate) struct Tables {
    pub init: [u64; 6],
    pub xor: Vec<[u64; 6]>,
    pub add: Vec<[u64; 6]>,
    pub mix: Vec<[u8; 6]>,
    pub fin: [u8; 48],
}

lazy_static! {
    pub(crate) static ref TABLES: Tables = Tables::decode();
}

impl Tables {
    fn decode() -> Tables {
        let xor: Vec<[u64; 6]> = ROWS_XOR.iter().map(|r| decode_words(r)).collect();
        let add: Vec<[u64; 6]> = ROWS_ADD.iter().map(|r| decode_words(r)).collect();
        let mix: Vec<[u8; 6]> = ROWS_MIX.iter().map(|r| decode_selectors(r)).collect();
        let init = decode_words(ROW_INI);
        let fin_bytes = decode_row(ROW_FIN, 48);
        let mut fin = [0u8; 48];
        fin.copy_from_slice(&fin_bytes);
        for &sel in fin.iter() {
            if sel >= 48 {
                panic!("corrupted table payload: FIN selector {} out of range", sel);
            }
        }
        Tables { init, xor, add, mix, fin }
    }
}

fn decode_row(row: &str, len: usize) -> Vec<u8> {
    match base64::decode(row) {
        Ok(bytes) if bytes.len() == len => bytes,
        Ok(bytes) => panic!(
            "corrupted table payload: row decodes to {} bytes, expected {}",
            bytes.len(),
            len
        ),
        Err(err) => panic!("corrupted table payload: {}", err),
    }
}

/// One row of six words, stored little-endian.
fn decode_words(row: &str) -> [u64; 6] {
    let bytes = decode_row(row, 48);
    let mut words = [0u64; 6];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(chunk);
        *word = u64::from_le_bytes(le);
    }
    words
}

fn decode_selectors(row: &str) -> [u8; 6] {
    let bytes = decode_row(row, 6);
    let mut sel = [0u8; 6];
    sel.copy_from_slice(&bytes);
    for &s in sel.iter() {
        if s >= 6 {
            panic!("corrupted table payload: MIX selector {} out of range", s);
        }
    }
    sel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_decode_with_expected_shapes() {
        assert_eq!(TABLES.xor.len(), 257);
        assert_eq!(TABLES.add.len(), 257);
        assert_eq!(TABLES.mix.len(), 256);
        assert_eq!(TABLES.init.len(), 6);
    }

    #[test]
    fn selectors_stay_in_range() {
        assert!(TABLES.mix.iter().all(|row| row.iter().all(|&s| s < 6)));
        assert!(TABLES.fin.iter().all(|&s| s < 48));
    }

    #[test]
    fn init_row_matches_published_words() {
        assert_eq!(TABLES.init[0], 0x243F6A8885A308D3);
        assert_eq!(TABLES.init[5], 0xBE5466CF34E90C6C);
    }
}
